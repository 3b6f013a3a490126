// This file is part of Brickfall Posts.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy::tasks::{block_on, futures_lite::future, IoTaskPool, Task};

use super::api::{ApiEnvelope, FetchError, FetchOutcome, Post};
use super::source::{ActivePostsSource, HttpPostsSource};
use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::system::system_order::SimulationSet;

/// Result of the one fetch. Written once when the request settles.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct PageData {
    pub posts: Vec<Post>,
    pub error: Option<String>,
}

/// Fired exactly once, whichever way the request ended.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchCompleted {
    pub success: bool,
}

#[derive(Resource)]
struct PendingFetch(Task<Result<ApiEnvelope, FetchError>>);

pub struct FetchPlugin;

impl Plugin for FetchPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FetchCompleted>()
            .init_resource::<PageData>()
            .add_systems(Startup, start_fetch)
            .add_systems(
                Update,
                poll_fetch
                    .in_set(SimulationSet)
                    .run_if(in_state(AppState::Loading))
                    .run_if(resource_exists::<PendingFetch>),
            );
    }
}

fn start_fetch(
    mut commands: Commands,
    cfg: Option<Res<GameConfig>>,
    source: Option<Res<ActivePostsSource>>,
) {
    let source = match source {
        Some(s) => (*s).clone(),
        None => {
            let api = cfg.map(|c| c.api.clone()).unwrap_or_default();
            ActivePostsSource::new(HttpPostsSource::new(api.endpoint(), api.timeout()))
        }
    };
    info!(target: "fetch", "requesting posts: {}", source.0.describe());
    let task = IoTaskPool::get().spawn(async move { source.0.fetch() });
    commands.insert_resource(PendingFetch(task));
}

fn poll_fetch(
    mut commands: Commands,
    mut pending: ResMut<PendingFetch>,
    cfg: Option<Res<GameConfig>>,
    mut page: ResMut<PageData>,
    mut next_state: ResMut<NextState<AppState>>,
    mut completed: EventWriter<FetchCompleted>,
) {
    let Some(result) = block_on(future::poll_once(&mut pending.0)) else {
        return;
    };
    commands.remove_resource::<PendingFetch>();

    if let Err(e) = &result {
        warn!(target: "fetch", "request failed: {e}");
    }
    let fallback = cfg
        .map(|c| c.content.error_fallback.clone())
        .unwrap_or_else(|| crate::core::config::ContentConfig::default().error_fallback);

    match FetchOutcome::from_result(result, &fallback) {
        FetchOutcome::Posts(posts) => {
            info!(target: "fetch", "received {} posts", posts.len());
            page.posts = posts;
            next_state.set(AppState::Content);
            completed.write(FetchCompleted { success: true });
        }
        FetchOutcome::Failed(message) => {
            info!(target: "fetch", "showing error: {message}");
            page.error = Some(message);
            next_state.set(AppState::Error);
            completed.write(FetchCompleted { success: false });
        }
    }
}
