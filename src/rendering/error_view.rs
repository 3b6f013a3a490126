use bevy::prelude::*;

use super::palette::palette;
use super::view::{page_view, PageView};
use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::fetch::PageData;

pub struct ErrorViewPlugin;

impl Plugin for ErrorViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Error), spawn_error_ui)
            .add_systems(OnExit(AppState::Error), despawn_error_ui);
    }
}

#[derive(Component)]
pub struct ErrorUiRoot;

/// Carries the message shown to the user.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessageText(pub String);

fn spawn_error_ui(mut commands: Commands, page: Res<PageData>, cfg: Option<Res<GameConfig>>) {
    let cfg = cfg.as_deref().cloned().unwrap_or_default();
    let PageView::Error { message } = page_view(AppState::Error, &page, None, &cfg) else {
        return;
    };
    commands
        .spawn((
            ErrorUiRoot,
            Name::new("ErrorView"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                padding: UiRect::all(Val::Px(24.0)),
                ..default()
            },
        ))
        .with_children(|root| {
            root.spawn((
                ErrorMessageText(message.clone()),
                Text::new(message),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(palette::HEADING_ERROR),
                TextLayout::new_with_justify(JustifyText::Center),
            ));
        });
}

fn despawn_error_ui(mut commands: Commands, q_root: Query<Entity, With<ErrorUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
