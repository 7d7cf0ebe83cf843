use bevy::prelude::*;

use crate::app::menu::MenuPlugin;
use crate::app::state::AppState;
use crate::config::GameConfig;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::GameplayPlugin;
use crate::rendering::RenderPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_systems(Startup, log_config_warnings)
            .add_plugins((
                MenuPlugin,
                GameplayPlugin,
                RenderPlugin,
                #[cfg(feature = "debug")]
                DebugPlugin,
            ));
    }
}

fn log_config_warnings(cfg: Res<GameConfig>) {
    for warning in cfg.validate() {
        warn!("config: {warning}");
    }
}
