pub mod plugin;
pub mod state;

pub use plugin::{BrickfallPlugin, ConfigWarnings};
pub use state::{AppState, AppStatePlugin, MinigameState};
