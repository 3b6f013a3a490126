use bevy::prelude::*;

use crate::app::state::MinigameState;
use crate::core::system::system_order::InputSet;
use crate::minigame::field::{BrickField, LaneShift};
use crate::minigame::plugin::RestartRequested;

pub struct LaneInputPlugin;

impl Plugin for LaneInputPlugin {
    fn build(&self, app: &mut App) {
        // no-op when InputPlugin already registered it
        app.init_resource::<ButtonInput<KeyCode>>().add_systems(
            Update,
            (
                lane_input_system.run_if(in_state(MinigameState::Playing)),
                restart_key_system.run_if(in_state(MinigameState::GameOver)),
            )
                .in_set(InputSet),
        );
    }
}

/// Left/right arrow presses move the player one lane; clamped by the field.
pub fn lane_input_system(keys: Res<ButtonInput<KeyCode>>, field: Option<ResMut<BrickField>>) {
    let Some(mut field) = field else { return; };
    for key in keys.get_just_pressed() {
        let shift = match key {
            KeyCode::ArrowLeft => LaneShift::Left,
            KeyCode::ArrowRight => LaneShift::Right,
            _ => continue,
        };
        if field.shift(shift) {
            trace!(target: "minigame", "player lane -> {}", field.player_lane());
        }
    }
}

/// Keyboard shortcut for the game-over overlay's restart button.
pub fn restart_key_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut writer: EventWriter<RestartRequested>,
) {
    if keys.any_just_pressed([KeyCode::KeyR, KeyCode::Enter]) {
        writer.write(RestartRequested);
    }
}
