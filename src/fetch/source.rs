// This file is part of Brickfall Posts.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{path::PathBuf, sync::Arc, time::Duration};

use bevy::prelude::*;

use super::api::{ApiEnvelope, FetchError};

/// Where the post list comes from. Called once, off the main thread.
pub trait PostsSource: Send + Sync + 'static {
    fn fetch(&self) -> Result<ApiEnvelope, FetchError>;

    /// Short human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Shared handle so the fetch task can own a clone.
#[derive(Resource, Clone)]
pub struct ActivePostsSource(pub Arc<dyn PostsSource>);

impl ActivePostsSource {
    pub fn new(source: impl PostsSource) -> Self {
        Self(Arc::new(source))
    }
}

/// Single GET against the posts endpoint. The body is decoded whatever the status
/// code; error statuses that still carry the envelope surface their message.
pub struct HttpPostsSource {
    url: String,
    timeout: Option<Duration>,
}

impl HttpPostsSource {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl PostsSource for HttpPostsSource {
    fn fetch(&self) -> Result<ApiEnvelope, FetchError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        let response = client.get(&self.url).send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(target: "fetch", "GET {} -> {} ({} bytes)", self.url, status, body.len());
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}

/// Reads the envelope from a JSON file on disk (offline runs, demos).
pub struct FilePostsSource {
    path: PathBuf,
}

impl FilePostsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PostsSource for FilePostsSource {
    fn fetch(&self) -> Result<ApiEnvelope, FetchError> {
        let data = std::fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&data)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
