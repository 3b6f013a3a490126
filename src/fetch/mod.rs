//! One-shot retrieval of the post list.

pub mod api;
pub mod plugin;
pub mod source;

pub use api::{ApiEnvelope, FetchError, FetchOutcome, Post};
pub use plugin::{FetchCompleted, FetchPlugin, PageData};
pub use source::{ActivePostsSource, FilePostsSource, HttpPostsSource, PostsSource};
