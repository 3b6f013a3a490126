use bevy::prelude::*;

use super::palette::palette;
use super::view::{page_view, CardView, PageView};
use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::system::system_order::PresentationSet;
use crate::fetch::PageData;

pub struct ContentViewPlugin;

impl Plugin for ContentViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Content), spawn_content_ui)
            .add_systems(
                Update,
                card_hover_system
                    .in_set(PresentationSet)
                    .run_if(in_state(AppState::Content)),
            )
            .add_systems(OnExit(AppState::Content), despawn_content_ui);
    }
}

#[derive(Component)]
pub struct ContentUiRoot;

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ContentHeading(pub String);

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: serde_json::Number,
    pub title: String,
}

/// Title/body layer, visible only while its card is hovered.
#[derive(Component)]
pub struct CardOverlay;

fn spawn_content_ui(
    mut commands: Commands,
    page: Res<PageData>,
    cfg: Option<Res<GameConfig>>,
    asset_server: Option<Res<AssetServer>>,
) {
    let cfg = cfg.as_deref().cloned().unwrap_or_default();
    let PageView::Content(view) = page_view(AppState::Content, &page, None, &cfg) else {
        return;
    };
    let columns = cfg.content.columns.max(1);
    let card_height = cfg.content.card_height;
    // one handle shared by every card
    let image = asset_server.map(|s| s.load::<Image>(cfg.content.card_image.clone()));

    commands
        .spawn((
            ContentUiRoot,
            Name::new("ContentView"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(24.0)),
                row_gap: Val::Px(24.0),
                overflow: Overflow::scroll_y(),
                ..default()
            },
        ))
        .with_children(|root| {
            spawn_heading(root, &view.heading);
            root.spawn(Node {
                display: Display::Grid,
                width: Val::Percent(100.0),
                grid_template_columns: RepeatedGridTrack::flex(columns, 1.0),
                row_gap: Val::Px(24.0),
                column_gap: Val::Px(24.0),
                ..default()
            })
            .with_children(|grid| {
                for card in &view.cards {
                    spawn_card(grid, card, card_height, image.clone());
                }
            });
        });
    info!(target: "ui", "content view with {} cards", view.cards.len());
}

/// Heading drawn as per-character spans so the colour can run along a gradient.
fn spawn_heading(root: &mut ChildSpawnerCommands, heading: &str) {
    let font = TextFont {
        font_size: 30.0,
        ..default()
    };
    let chars: Vec<char> = heading.chars().collect();
    let last = chars.len().saturating_sub(1).max(1) as f32;
    root.spawn((
        ContentHeading(heading.to_string()),
        Node {
            align_self: AlignSelf::Center,
            ..default()
        },
        Text::default(),
        font.clone(),
        TextLayout::new_with_justify(JustifyText::Center),
    ))
    .with_children(|text| {
        for (i, ch) in chars.iter().enumerate() {
            text.spawn((
                TextSpan::new(ch.to_string()),
                font.clone(),
                TextColor(palette::heading_gradient(i as f32 / last)),
            ));
        }
    });
}

fn spawn_card(
    grid: &mut ChildSpawnerCommands,
    card: &CardView,
    height: f32,
    image: Option<Handle<Image>>,
) {
    grid.spawn((
        PostCard {
            id: card.id.clone(),
            title: card.title.clone(),
        },
        Interaction::default(),
        Node {
            width: Val::Percent(100.0),
            height: Val::Px(height),
            overflow: Overflow::clip(),
            ..default()
        },
        BorderRadius::all(Val::Px(8.0)),
        BackgroundColor(palette::FIELD_BACKGROUND),
    ))
    .with_children(|c| {
        if let Some(image) = image {
            c.spawn((
                ImageNode::new(image),
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
            ));
        }
        c.spawn((
            CardOverlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(palette::CARD_OVERLAY),
            Visibility::Hidden,
        ))
        .with_children(|o| {
            o.spawn((
                Text::new(card.title.clone()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            o.spawn((
                Text::new(card.body.clone()),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(palette::CARD_BODY_TEXT),
                TextLayout::new_with_justify(JustifyText::Center),
            ));
        });
    });
}

pub fn card_hover_system(
    q_cards: Query<(&Interaction, &Children), (Changed<Interaction>, With<PostCard>)>,
    mut q_overlay: Query<&mut Visibility, With<CardOverlay>>,
) {
    for (interaction, children) in &q_cards {
        let show = matches!(interaction, Interaction::Hovered | Interaction::Pressed);
        for &child in &**children {
            if let Ok(mut vis) = q_overlay.get_mut(child) {
                vis.set_if_neq(if show {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                });
            }
        }
    }
}

fn despawn_content_ui(mut commands: Commands, q_root: Query<Entity, With<ContentUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
