use bevy::prelude::*;

use crate::app::state::AppState;
use crate::gameplay::{Ball, Score};

const LOG_INTERVAL: f32 = 5.0;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sim_logging.run_if(in_state(AppState::Play)));
    }
}

fn sim_logging(
    time: Res<Time>,
    mut accum: Local<f32>,
    score: Res<Score>,
    balls: Query<&Ball>,
) {
    *accum += time.delta_secs();
    if *accum < LOG_INTERVAL {
        return;
    }
    *accum = 0.0;
    let Ok(ball) = balls.single() else {
        return;
    };
    info!(
        "SIM score={}-{} ball=({:.0},{:.0}) step=({},{})",
        score.player, score.opponent, ball.pos.x, ball.pos.y, ball.step.x, ball.step.y
    );
}
