pub mod field;
pub mod plugin;

pub use field::{Brick, BrickField, BrickRules, LaneShift, TickReport};
pub use plugin::{MinigamePlugin, MinigameRng, MinigameTicker, RestartRequested};
