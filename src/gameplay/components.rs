use bevy::prelude::*;

/// A deflecting rectangle. `pos` is the top-left corner in board
/// coordinates.
#[derive(Component, Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.pos, self.pos + self.size)
    }
}

/// Right-side paddle, moved by the keyboard.
#[derive(Component, Debug, Default)]
pub struct PlayerPaddle;

/// Left-side paddle, moved by the tracking heuristic.
#[derive(Component, Debug, Default)]
pub struct OpponentPaddle;

/// The ball. `pos` is the center in board coordinates; `step` is the
/// per-tick displacement, fixed in magnitude with only the signs changing.
#[derive(Component, Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub step: IVec2,
}

impl Ball {
    pub fn serve(pos: Vec2, radius: f32, step: i32) -> Self {
        Self {
            pos,
            radius,
            step: IVec2::splat(step),
        }
    }
}
