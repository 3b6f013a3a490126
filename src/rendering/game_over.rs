use bevy::prelude::*;

use super::confetti::ConfettiTimer;
use super::palette::palette;
use super::view::{overlays, GAME_OVER_TITLE, RESTART_LABEL};
use crate::app::state::{AppState, MinigameState};
use crate::core::system::system_order::{InputSet, PresentationSet};
use crate::minigame::plugin::RestartRequested;

pub struct GameOverOverlayPlugin;

impl Plugin for GameOverOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, restart_button_system.in_set(InputSet))
            .add_systems(Update, sync_game_over_overlay.in_set(PresentationSet));
    }
}

#[derive(Component)]
pub struct GameOverOverlay;

#[derive(Component)]
pub struct RestartButton;

fn sync_game_over_overlay(
    mut commands: Commands,
    page: Res<State<AppState>>,
    game: Res<State<MinigameState>>,
    confetti: Option<Res<ConfettiTimer>>,
    q_overlay: Query<Entity, With<GameOverOverlay>>,
) {
    let confetti_active = confetti.is_some_and(|t| t.is_active());
    let wanted = overlays(*page.get(), confetti_active, *game.get()).game_over;
    let present = !q_overlay.is_empty();
    if wanted && !present {
        spawn_overlay(&mut commands);
    } else if !wanted && present {
        for e in &q_overlay {
            commands.entity(e).despawn();
        }
    }
}

fn spawn_overlay(commands: &mut Commands) {
    commands
        .spawn((
            GameOverOverlay,
            Name::new("GameOverOverlay"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(palette::DIM_LAYER),
            GlobalZIndex(20),
        ))
        .with_children(|o| {
            o.spawn((
                Text::new(GAME_OVER_TITLE),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            o.spawn((
                RestartButton,
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(24.0), Val::Px(8.0)),
                    ..default()
                },
                BorderRadius::all(Val::Px(4.0)),
                BackgroundColor(palette::BUTTON),
            ))
            .with_child((
                Text::new(RESTART_LABEL),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

#[allow(clippy::type_complexity)]
fn restart_button_system(
    mut q_btn: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<RestartButton>),
    >,
    mut writer: EventWriter<RestartRequested>,
) {
    for (interaction, mut bg) in &mut q_btn {
        match *interaction {
            Interaction::Pressed => {
                writer.write(RestartRequested);
            }
            Interaction::Hovered => *bg = BackgroundColor(palette::BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(palette::BUTTON),
        }
    }
}
