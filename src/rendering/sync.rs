use bevy::prelude::*;

use crate::gameplay::{Ball, Court, Paddle};

pub fn sync_paddle_transforms(
    court: Res<Court>,
    mut paddles: Query<(&Paddle, &mut Transform)>,
) {
    for (paddle, mut tf) in &mut paddles {
        let world = court.to_world(paddle.pos + paddle.size * 0.5);
        tf.translation.x = world.x;
        tf.translation.y = world.y;
    }
}

pub fn sync_ball_transforms(court: Res<Court>, mut balls: Query<(&Ball, &mut Transform)>) {
    for (ball, mut tf) in &mut balls {
        let world = court.to_world(ball.pos);
        tf.translation.x = world.x;
        tf.translation.y = world.y;
    }
}
