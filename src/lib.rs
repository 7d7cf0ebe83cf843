pub mod app;
pub mod config;
#[cfg(feature = "debug")]
pub mod debug;
pub mod gameplay;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use app::menu::MenuPlugin;
pub use app::state::AppState;
pub use config::GameConfig;
pub use gameplay::{Ball, Court, GameplayPlugin, GoalEvent, OpponentPaddle, Paddle, PlayerPaddle, Score, Side};
