use bevy::prelude::*;

/// Keyboard state snapshot taken once per tick. Movement logic reads this
/// instead of the input backend, so it can run headless.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

pub fn sample_paddle_input(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<PaddleInput>) {
    input.up = keys.pressed(KeyCode::ArrowUp);
    input.down = keys.pressed(KeyCode::ArrowDown);
}
