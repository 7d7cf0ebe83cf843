use bevy::prelude::*;

use pong_champ::{GameConfig, GamePlugin};

const CONFIG_PATH: &str = "assets/config/game.ron";

fn main() -> anyhow::Result<()> {
    let cfg = GameConfig::load_from_file(CONFIG_PATH)
        .map_err(|e| anyhow::anyhow!("failed to load {CONFIG_PATH}: {e}"))?;

    let window = Window {
        title: cfg.window.title.clone(),
        resolution: (cfg.window.width, cfg.window.height).into(),
        resizable: false,
        ..default()
    };

    let exit = App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(cfg)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("event loop terminated with error code {code}"),
    }
}
