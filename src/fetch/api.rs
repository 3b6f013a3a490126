// This file is part of Brickfall Posts.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire types for the posts endpoint and their reduction to a page outcome.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use thiserror::Error;

/// `id` is any JSON number (negative and fractional ids included); it is only a display key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Number,
    pub title: String,
    pub body: String,
}

/// `{ success, data?, message? }` as served by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<Post>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    pub fn ok(posts: Vec<Post>) -> Self {
        Self {
            success: true,
            data: Some(posts),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Posts(Vec<Post>),
    Failed(String),
}

impl FetchOutcome {
    /// API-reported failures keep their message; anything below the API collapses to `fallback`.
    pub fn from_result(result: Result<ApiEnvelope, FetchError>, fallback: &str) -> Self {
        match result {
            Ok(env) if env.success => FetchOutcome::Posts(env.data.unwrap_or_default()),
            Ok(env) => FetchOutcome::Failed(
                env.message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            ),
            Err(_) => FetchOutcome::Failed(fallback.to_string()),
        }
    }
}
