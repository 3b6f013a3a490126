use std::collections::HashMap;

use bevy::prelude::*;

use super::palette::palette;
use super::view::{loading_view, score_label, LOADING_HEADING, LOADING_HINT};
use crate::app::state::AppState;
use crate::core::config::{GameConfig, MinigameConfig};
use crate::core::system::system_order::PresentationSet;
use crate::minigame::field::BrickField;

pub struct LoadingViewPlugin;

impl Plugin for LoadingViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Loading), spawn_loading_ui)
            .add_systems(
                Update,
                sync_loading_ui
                    .in_set(PresentationSet)
                    .run_if(in_state(AppState::Loading))
                    .run_if(resource_exists::<BrickField>),
            )
            .add_systems(OnExit(AppState::Loading), despawn_loading_ui);
    }
}

#[derive(Component)]
pub struct LoadingUiRoot;

/// Positioning parent for bricks and the player.
#[derive(Component)]
pub struct GameFieldNode;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickNode(pub u64);

#[derive(Component)]
pub struct PlayerNode;

#[derive(Component)]
pub struct ScoreText;

fn minigame_cfg(cfg: Option<&GameConfig>) -> MinigameConfig {
    cfg.map(|c| c.minigame.clone()).unwrap_or_default()
}

fn field_width(m: &MinigameConfig) -> f32 {
    (m.lanes.max(1) - 1) as f32 * m.lane_spacing + m.brick_size
}

fn spawn_loading_ui(mut commands: Commands, cfg: Option<Res<GameConfig>>) {
    let m = minigame_cfg(cfg.as_deref());

    commands
        .spawn((
            LoadingUiRoot,
            Name::new("LoadingView"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(24.0)),
                row_gap: Val::Px(16.0),
                ..default()
            },
        ))
        .with_children(|root| {
            root.spawn((
                Text::new(LOADING_HEADING),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(palette::HEADING_LOADING),
            ));
            root.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(m.field_height),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(palette::FIELD_BACKGROUND),
            ))
            .with_children(|container| {
                container
                    .spawn((
                        GameFieldNode,
                        Node {
                            width: Val::Px(field_width(&m)),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                    ))
                    .with_children(|field| {
                        field.spawn((
                            PlayerNode,
                            Node {
                                position_type: PositionType::Absolute,
                                width: Val::Px(m.brick_size),
                                height: Val::Px(m.brick_size),
                                bottom: Val::Px(0.0),
                                left: Val::Px(0.0),
                                ..default()
                            },
                            BackgroundColor(palette::PLAYER),
                        ));
                    });
            });
            root.spawn((
                ScoreText,
                Text::new(score_label(0)),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(palette::MUTED_TEXT),
            ));
            root.spawn((
                Text::new(LOADING_HINT),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(palette::MUTED_TEXT),
            ));
        });
    debug!(target: "ui", "loading view spawned");
}

fn brick_node(left: f32, top: f32, size: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Px(size),
        height: Val::Px(size),
        left: Val::Px(left),
        top: Val::Px(top),
        ..default()
    }
}

/// Reconciles brick nodes, the player and the score with the field.
#[allow(clippy::type_complexity)]
pub fn sync_loading_ui(
    mut commands: Commands,
    field: Res<BrickField>,
    cfg: Option<Res<GameConfig>>,
    q_field: Query<Entity, With<GameFieldNode>>,
    mut q_bricks: Query<(Entity, &BrickNode, &mut Node), Without<PlayerNode>>,
    mut q_player: Query<&mut Node, (With<PlayerNode>, Without<BrickNode>)>,
    mut q_score: Query<&mut Text, With<ScoreText>>,
) {
    let m = minigame_cfg(cfg.as_deref());
    let view = loading_view(&field, m.lane_spacing);

    let mut wanted: HashMap<u64, (f32, f32)> = view
        .bricks
        .iter()
        .map(|b| (b.id, (b.left, b.top)))
        .collect();
    for (entity, brick, mut node) in &mut q_bricks {
        match wanted.remove(&brick.0) {
            Some((left, top)) => {
                node.left = Val::Px(left);
                node.top = Val::Px(top);
            }
            None => commands.entity(entity).despawn(),
        }
    }
    if let Ok(field_entity) = q_field.single() {
        for (id, (left, top)) in wanted {
            commands.entity(field_entity).with_child((
                BrickNode(id),
                brick_node(left, top, m.brick_size),
                BackgroundColor(palette::BRICK),
            ));
        }
    }

    if let Ok(mut node) = q_player.single_mut() {
        node.left = Val::Px(view.player_left);
    }
    if let Ok(mut text) = q_score.single_mut() {
        let label = score_label(view.score);
        if text.0 != label {
            text.0 = label;
        }
    }
}

fn despawn_loading_ui(mut commands: Commands, q_root: Query<Entity, With<LoadingUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
