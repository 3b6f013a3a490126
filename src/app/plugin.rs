// This file is part of Brickfall Posts.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use super::state::AppStatePlugin;
use crate::core::config::GameConfig;
use crate::core::system::system_order::{InputSet, PresentationSet, SimulationSet};
use crate::debug::DebugPlugin;
use crate::fetch::FetchPlugin;
use crate::interaction::input::lane_input::LaneInputPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::minigame::MinigamePlugin;
use crate::rendering::RenderingPlugin;

/// Warnings collected before logging was up (config load and validation).
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigWarnings(pub Vec<String>);

/// Everything except windowing/rendering backends; works under `MinimalPlugins` + `StatesPlugin`.
pub struct BrickfallPlugin;

impl Plugin for BrickfallPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (InputSet, SimulationSet.after(InputSet), PresentationSet.after(SimulationSet)),
        )
        .init_resource::<ConfigWarnings>()
        .add_systems(Startup, report_config)
        .add_plugins((
            AppStatePlugin,
            LaneInputPlugin,
            MinigamePlugin,
            FetchPlugin,
            RenderingPlugin,
            AutoClosePlugin,
            DebugPlugin,
        ));
    }
}

fn report_config(cfg: Option<Res<GameConfig>>, warnings: Res<ConfigWarnings>) {
    for w in &warnings.0 {
        warn!(target: "config", "{w}");
    }
    match cfg {
        Some(cfg) => {
            for w in cfg.validate() {
                warn!(target: "config", "{w}");
            }
            info!(target: "config", "endpoint {}", cfg.api.endpoint());
        }
        None => warn!(target: "config", "GameConfig missing; using defaults"),
    }
}
