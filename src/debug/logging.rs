use bevy::prelude::*;

use super::state::{DebugState, DebugStats};
use crate::app::state::{AppState, MinigameState};

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    stats: Res<DebugStats>,
    page: Option<Res<State<AppState>>>,
    game: Option<Res<State<MinigameState>>>,
) {
    if !state.logging_enabled {
        return;
    }
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(target: "debug",
            "frame={} t={:.3}s fps={:.1} ft_ms={:.1} page={:?} game={:?} score={} bricks={} lane={} nodes={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            page.map(|s| *s.get()),
            game.map(|s| *s.get()),
            stats.score,
            stats.brick_count,
            stats.player_lane,
            stats.ui_nodes);
    }
}
