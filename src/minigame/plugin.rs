// This file is part of Brickfall Posts.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use super::field::BrickField;
use crate::app::state::{AppState, MinigameState};
use crate::core::config::GameConfig;
use crate::core::system::system_order::{InputSet, SimulationSet};

/// Fixed-cadence loop timer. One completion = one field tick.
#[derive(Resource, Deref, DerefMut)]
pub struct MinigameTicker(pub Timer);

/// RNG driving brick spawns. Insert a seeded one before startup for reproducible runs.
#[derive(Resource, Deref, DerefMut)]
pub struct MinigameRng(pub StdRng);

impl MinigameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Asks for a fresh round; honoured only while the game is over.
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct RestartRequested;

pub struct MinigamePlugin;

impl Plugin for MinigamePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RestartRequested>()
            .add_systems(Startup, setup_minigame)
            .add_systems(
                Update,
                (
                    tick_minigame
                        .run_if(in_state(AppState::Loading))
                        .run_if(in_state(MinigameState::Playing)),
                    apply_restart
                        .after(InputSet)
                        .run_if(in_state(MinigameState::GameOver)),
                )
                    .in_set(SimulationSet),
            );
    }
}

fn setup_minigame(
    mut commands: Commands,
    cfg: Option<Res<GameConfig>>,
    rng: Option<Res<MinigameRng>>,
    field: Option<Res<BrickField>>,
) {
    let m = cfg.map(|c| c.minigame.clone()).unwrap_or_default();
    if field.is_none() {
        commands.insert_resource(BrickField::new(m.rules(), m.clamped_start_lane()));
    }
    if rng.is_none() {
        commands.insert_resource(MinigameRng(StdRng::from_entropy()));
    }
    commands.insert_resource(MinigameTicker(Timer::new(
        m.tick_interval(),
        TimerMode::Repeating,
    )));
    info!(
        target: "minigame",
        "minigame ready: lanes={} tick={}ms step={} catch>={} limit={} spawn_chance={}",
        m.rules().lanes,
        m.tick_interval().as_millis(),
        m.fall_step,
        m.catch_threshold,
        m.visible_limit,
        m.rules().spawn_chance,
    );
}

/// Advances the field once per ticker completion. A stalled frame that spans several
/// intervals still yields a single tick.
pub fn tick_minigame(
    time: Res<Time>,
    mut ticker: ResMut<MinigameTicker>,
    mut field: ResMut<BrickField>,
    mut rng: ResMut<MinigameRng>,
    mut next_state: ResMut<NextState<MinigameState>>,
) {
    ticker.tick(time.delta());
    if !ticker.just_finished() {
        return;
    }
    let report = field.tick(&mut rng.0);
    if let Some(brick) = report.caught {
        debug!(target: "minigame", "caught brick {} in lane {} (score {})", brick.id, brick.lane, field.score());
    }
    if report.game_over {
        info!(target: "minigame", "game over in lane {} with score {}", field.player_lane(), field.score());
        next_state.set(MinigameState::GameOver);
    }
}

fn apply_restart(
    mut requests: EventReader<RestartRequested>,
    mut field: ResMut<BrickField>,
    mut ticker: ResMut<MinigameTicker>,
    mut next_state: ResMut<NextState<MinigameState>>,
) {
    if requests.read().count() == 0 {
        return;
    }
    field.restart();
    ticker.reset();
    next_state.set(MinigameState::Playing);
    info!(target: "minigame", "restarted");
}
