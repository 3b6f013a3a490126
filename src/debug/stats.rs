use bevy::prelude::*;

use super::state::{DebugState, DebugStats};
use crate::minigame::field::BrickField;

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    field: Option<Res<BrickField>>,
    q_nodes: Query<(), With<Node>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs();
    if dt > 0.0 {
        // light smoothing so the logged fps doesn't jitter frame to frame
        let fps = 1.0 / dt;
        stats.fps = if stats.fps == 0.0 { fps } else { stats.fps * 0.9 + fps * 0.1 };
        stats.frame_time_ms = dt * 1000.0;
    }
    if let Some(field) = field {
        stats.score = field.score();
        stats.brick_count = field.bricks().len();
        stats.player_lane = field.player_lane();
    }
    stats.ui_nodes = q_nodes.iter().count();
}
