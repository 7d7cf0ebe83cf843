use bevy::prelude::*;

use super::collision::circle_hits_rect;
use super::components::{Ball, Paddle};
use super::court::Court;
use super::score::{GoalEvent, Score, Side};

/// One simulation tick for the ball: exit scoring, top/bottom reflection,
/// then an unconditional advance by the current step. Returns the scoring
/// side when the ball left the court this tick.
pub fn step_ball(ball: &mut Ball, court: &Court) -> Option<Side> {
    let scored = if ball.pos.x > court.width {
        Some(Side::Opponent)
    } else if ball.pos.x < 0.0 {
        Some(Side::Player)
    } else {
        None
    };
    if scored.is_some() {
        // Re-center and flip the serve direction; the magnitude never
        // changes.
        ball.pos = court.center();
        ball.step.x = -ball.step.x;
    }

    // Reflect only while heading into a wall, so a crossing flips the sign
    // exactly once rather than every tick spent inside the margin.
    let heading_out_bottom = ball.pos.y > court.height - ball.radius && ball.step.y > 0;
    let heading_out_top = ball.pos.y < ball.radius && ball.step.y < 0;
    if heading_out_bottom || heading_out_top {
        ball.step.y = -ball.step.y;
    }

    ball.pos += ball.step.as_vec2();
    scored
}

/// Flip the horizontal direction when the ball touches either paddle. The
/// flip happens at most once per tick no matter how many paddles report
/// contact. Vertical direction and speed are untouched, and an overlapping
/// ball is not pushed out.
pub fn deflect_off_paddles<'a>(ball: &mut Ball, paddles: impl Iterator<Item = &'a Paddle>) {
    let mut hit = false;
    for paddle in paddles {
        hit |= circle_hits_rect(ball.pos, ball.radius, paddle.rect());
    }
    if hit {
        ball.step.x = -ball.step.x;
    }
}

pub fn move_ball(
    court: Res<Court>,
    mut score: ResMut<Score>,
    mut goals: EventWriter<GoalEvent>,
    mut balls: Query<&mut Ball>,
) {
    for mut ball in &mut balls {
        if let Some(side) = step_ball(&mut ball, &court) {
            score.add(side);
            goals.write(GoalEvent { scorer: side });
        }
    }
}

pub fn rebound_off_paddles(mut balls: Query<&mut Ball>, paddles: Query<&Paddle>) {
    for mut ball in &mut balls {
        deflect_off_paddles(&mut ball, paddles.iter());
    }
}
