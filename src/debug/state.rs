use bevy::prelude::*;

#[derive(Resource, Debug)]
pub struct DebugState {
    pub logging_enabled: bool,
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            logging_enabled: true,
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[derive(Resource, Default, Debug, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub score: u32,
    pub brick_count: usize,
    pub player_lane: u8,
    pub ui_nodes: usize,
}
