pub mod config;

pub use config::{
    ApiConfig, ConfettiConfig, ContentConfig, GameConfig, LogConfig, MinigameConfig, WindowConfig,
};
