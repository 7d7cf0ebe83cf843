use bevy::prelude::*;

use crate::config::GameConfig;

use super::components::{Ball, OpponentPaddle, Paddle, PlayerPaddle};
use super::court::Court;
use super::input::PaddleInput;

/// Move the player paddle by one step in the held direction. Up wins when
/// both directions are held. The result is clamped to the court.
pub fn step_player(paddle: &mut Paddle, input: &PaddleInput, step: f32, court: &Court) {
    if input.up {
        paddle.pos.y -= step;
    } else if input.down {
        paddle.pos.y += step;
    }
    paddle.pos.y = court.clamp_paddle_y(paddle.pos.y, paddle.size.y);
}

/// Move the opponent paddle one step toward the ball's vertical position,
/// clamped to the court. A paddle already centered on the ball holds still.
pub fn step_opponent(paddle: &mut Paddle, ball_y: f32, step: f32, court: &Court) {
    let center = paddle.center_y();
    if center < ball_y {
        paddle.pos.y += step;
    } else if center > ball_y {
        paddle.pos.y -= step;
    }
    paddle.pos.y = court.clamp_paddle_y(paddle.pos.y, paddle.size.y);
}

pub fn move_player_paddle(
    cfg: Res<GameConfig>,
    court: Res<Court>,
    input: Res<PaddleInput>,
    mut paddles: Query<&mut Paddle, With<PlayerPaddle>>,
) {
    let Ok(mut paddle) = paddles.single_mut() else {
        return;
    };
    step_player(&mut paddle, &input, cfg.paddle.step, &court);
}

pub fn move_opponent_paddle(
    cfg: Res<GameConfig>,
    court: Res<Court>,
    balls: Query<&Ball>,
    mut paddles: Query<&mut Paddle, With<OpponentPaddle>>,
) {
    let Ok(ball) = balls.single() else {
        return;
    };
    let Ok(mut paddle) = paddles.single_mut() else {
        return;
    };
    step_opponent(&mut paddle, ball.pos.y, cfg.paddle.step, &court);
}
