use bevy::prelude::*;

use crate::gameplay::{Court, Score, Side};

const SCORE_OFFSET_X: f32 = 60.0;
const SCORE_Y: f32 = 35.0;
const SCORE_FONT_SIZE: f32 = 35.0;

#[derive(Component)]
pub struct ScoreDisplay(pub Side);

pub fn spawn_score_displays(mut commands: Commands, court: Res<Court>) {
    // Each readout sits on its owner's half, just below the top edge.
    for (side, dx) in [
        (Side::Player, SCORE_OFFSET_X),
        (Side::Opponent, -SCORE_OFFSET_X),
    ] {
        let world = court.to_world(Vec2::new(court.width * 0.5 + dx, SCORE_Y));
        commands.spawn((
            Name::new("ScoreDisplay"),
            ScoreDisplay(side),
            Text2d::new("0"),
            TextFont {
                font_size: SCORE_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_translation(world.extend(1.0)),
        ));
    }
}

pub fn update_score_displays(
    score: Res<Score>,
    mut displays: Query<(&ScoreDisplay, &mut Text2d)>,
) {
    if !score.is_changed() {
        return;
    }
    for (display, mut text) in &mut displays {
        text.0 = score.of(display.0).to_string();
    }
}
