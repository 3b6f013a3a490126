use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Time left before an unattended run closes itself.
#[derive(Resource, Deref, DerefMut)]
pub struct SessionDeadline(Timer);

/// Exits after `window.autoClose` seconds; 0 or less keeps the window open.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_deadline).add_systems(
            Update,
            expire_session.run_if(resource_exists::<SessionDeadline>),
        );
    }
}

fn arm_session_deadline(mut commands: Commands, cfg: Option<Res<GameConfig>>) {
    let secs = cfg.map_or(0.0, |c| c.window.auto_close);
    if secs <= 0.0 {
        return;
    }
    info!(target: "app", seconds = secs, "closing the page after {secs}s");
    commands.insert_resource(SessionDeadline(Timer::from_seconds(secs, TimerMode::Once)));
}

fn expire_session(
    mut commands: Commands,
    time: Res<Time>,
    mut deadline: ResMut<SessionDeadline>,
    mut exit: EventWriter<AppExit>,
) {
    if deadline.tick(time.delta()).just_finished() {
        info!(target: "app", "session deadline reached");
        commands.remove_resource::<SessionDeadline>();
        exit.write(AppExit::Success);
    }
}
