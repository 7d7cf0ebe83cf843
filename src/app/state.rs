use bevy::prelude::*;

/// Top-level scene state.
/// Menu -> Play, one way; there is no pause and no way back to the menu.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Title screen; the simulation is not running.
    #[default]
    Menu,
    /// Active play until the window is closed.
    Play,
}
