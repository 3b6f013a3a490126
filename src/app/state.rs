use bevy::prelude::*;

/// Page lifecycle.
/// Loading -> Content | Error (no way back; the fetch runs once)
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Request in flight; the minigame is on screen.
    #[default]
    Loading,
    /// Posts arrived; grid view.
    Content,
    /// API-reported or transport failure; message only.
    Error,
}

/// Minigame lifecycle, independent of the page.
/// Playing -> GameOver -> (restart) -> Playing
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum MinigameState {
    #[default]
    Playing,
    GameOver,
}

/// Registers both state machines. Requires `StatesPlugin` (part of `DefaultPlugins`).
pub struct AppStatePlugin;

impl Plugin for AppStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_state::<MinigameState>()
            .add_systems(Update, log_state_transitions);
    }
}

fn log_state_transitions(
    mut page: EventReader<StateTransitionEvent<AppState>>,
    mut game: EventReader<StateTransitionEvent<MinigameState>>,
) {
    for ev in page.read() {
        info!(target: "app", "page state {:?} -> {:?}", ev.exited, ev.entered);
    }
    for ev in game.read() {
        info!(target: "app", "minigame state {:?} -> {:?}", ev.exited, ev.entered);
    }
}
