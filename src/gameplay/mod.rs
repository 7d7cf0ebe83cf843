pub mod ball;
pub mod collision;
pub mod components;
pub mod court;
pub mod input;
pub mod paddle;
pub mod score;

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::config::GameConfig;

pub use components::{Ball, OpponentPaddle, Paddle, PlayerPaddle};
pub use court::Court;
pub use input::PaddleInput;
pub use score::{GoalEvent, Score, Side};

/// Simulation ticks per second. Step constants are per tick, not scaled by
/// delta time, so the tick rate is part of the rules and not configurable.
pub const TICK_HZ: f64 = 60.0;

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world_mut()
            .get_resource_or_insert_with(GameConfig::default)
            .clone();
        app.insert_resource(Court::from_config(&cfg))
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .init_resource::<PaddleInput>()
            .init_resource::<Score>()
            .add_event::<GoalEvent>()
            .add_systems(OnEnter(AppState::Play), spawn_court_entities)
            .add_systems(
                FixedUpdate,
                (
                    input::sample_paddle_input,
                    paddle::move_player_paddle,
                    paddle::move_opponent_paddle,
                    ball::move_ball,
                    ball::rebound_off_paddles,
                )
                    .chain()
                    .run_if(in_state(AppState::Play)),
            )
            .add_systems(Update, score::log_goals.run_if(in_state(AppState::Play)));
    }
}

fn spawn_court_entities(mut commands: Commands, cfg: Res<GameConfig>, court: Res<Court>) {
    let size = Vec2::new(cfg.paddle.width, cfg.paddle.height);
    let y = court.height * 0.5;

    commands.spawn((
        Name::new("PlayerPaddle"),
        PlayerPaddle,
        Paddle::new(Vec2::new(court.width - cfg.paddle.player_inset, y), size),
    ));
    commands.spawn((
        Name::new("OpponentPaddle"),
        OpponentPaddle,
        Paddle::new(Vec2::new(cfg.paddle.opponent_inset, y), size),
    ));
    commands.spawn((
        Name::new("Ball"),
        Ball::serve(court.center(), cfg.ball.radius, cfg.ball.step),
    ));
}
