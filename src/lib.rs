pub mod app;
pub mod core;
pub mod debug;
pub mod fetch;
pub mod interaction;
pub mod minigame;
pub mod rendering;

// Curated re-exports
pub use app::{AppState, BrickfallPlugin, MinigameState};
pub use core::config::GameConfig;
pub use fetch::{ActivePostsSource, PageData, Post, PostsSource};
pub use minigame::BrickField;
