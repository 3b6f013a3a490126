use bevy::prelude::*;

use super::state::DebugState;

/// F3 toggles the periodic debug log line.
pub fn debug_key_input_system(keys: Option<Res<ButtonInput<KeyCode>>>, mut state: ResMut<DebugState>) {
    let Some(keys) = keys else { return; };
    if keys.just_pressed(KeyCode::F3) {
        state.logging_enabled = !state.logging_enabled;
        info!(target: "debug", "periodic logging {}", if state.logging_enabled { "on" } else { "off" });
    }
}
