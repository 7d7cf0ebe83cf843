pub mod arena;
pub mod hud;
pub mod sync;

use bevy::prelude::*;

use crate::app::state::AppState;

/// View layer: everything here draws what the simulation already decided.
/// No game rules live in this module tree.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arena::setup_camera)
            .add_systems(
                OnEnter(AppState::Play),
                (arena::spawn_center_line, hud::spawn_score_displays),
            )
            .add_systems(
                Update,
                (
                    arena::attach_paddle_sprites,
                    arena::attach_ball_mesh,
                    sync::sync_paddle_transforms,
                    sync::sync_ball_transforms,
                    hud::update_score_displays,
                ),
            );
    }
}
