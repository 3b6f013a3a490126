//! Page presentation: a pure state-to-view mapping plus the UI spawn/sync systems.

pub mod confetti;
pub mod content_view;
pub mod error_view;
pub mod game_over;
pub mod loading_view;
pub mod palette;
pub mod view;

use bevy::prelude::*;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            loading_view::LoadingViewPlugin,
            error_view::ErrorViewPlugin,
            content_view::ContentViewPlugin,
            confetti::ConfettiPlugin,
            game_over::GameOverOverlayPlugin,
        ));
    }
}
