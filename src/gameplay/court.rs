use bevy::prelude::*;

use crate::config::GameConfig;

/// Logical playing field, in board coordinates: origin at the top-left
/// corner, +y pointing down. The window shows the whole court 1:1.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            width: cfg.window.width,
            height: cfg.window.height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Keep a paddle's top edge inside [0, height - paddle_height].
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, self.height - paddle_height)
    }

    /// Board coordinates to world coordinates (origin at the court center,
    /// +y up), for the render layer only.
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.width * 0.5, self.height * 0.5 - p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COURT: Court = Court {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn clamp_keeps_paddle_on_court() {
        assert_eq!(COURT.clamp_paddle_y(-3.0, 100.0), 0.0);
        assert_eq!(COURT.clamp_paddle_y(250.0, 100.0), 250.0);
        assert_eq!(COURT.clamp_paddle_y(550.0, 100.0), 500.0);
    }

    #[test]
    fn world_mapping_flips_y_and_recenters() {
        assert_eq!(COURT.to_world(COURT.center()), Vec2::ZERO);
        assert_eq!(COURT.to_world(Vec2::ZERO), Vec2::new(-400.0, 300.0));
        assert_eq!(
            COURT.to_world(Vec2::new(800.0, 600.0)),
            Vec2::new(400.0, -300.0)
        );
    }
}
