// This file is part of Brickfall Posts.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! What the page shows for a given state, with no ECS involved. The spawn systems
//! in the sibling modules turn these into UI nodes.

use serde_json::Number;

use crate::app::state::{AppState, MinigameState};
use crate::core::config::GameConfig;
use crate::fetch::PageData;
use crate::minigame::field::BrickField;

pub const LOADING_HEADING: &str = "Loading... Play the game while you wait!";
pub const LOADING_HINT: &str = "Move the player with Left and Right arrows!";
pub const GAME_OVER_TITLE: &str = "Game Over";
pub const RESTART_LABEL: &str = "Restart Game";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickSprite {
    pub id: u64,
    pub left: f32,
    pub top: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingView {
    pub bricks: Vec<BrickSprite>,
    pub player_left: f32,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: Number,
    pub title: String,
    pub body: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentView {
    pub heading: String,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading(LoadingView),
    Error { message: String },
    Content(ContentView),
}

/// Layers drawn above whichever page is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlays {
    pub confetti: bool,
    pub game_over: bool,
}

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

/// Horizontal pixel offset of a lane inside the field.
pub fn lane_left(lane: u8, spacing: f32) -> f32 {
    lane as f32 * spacing
}

pub fn loading_view(field: &BrickField, spacing: f32) -> LoadingView {
    LoadingView {
        bricks: field
            .bricks()
            .iter()
            .map(|b| BrickSprite {
                id: b.id,
                left: lane_left(b.lane, spacing),
                top: b.offset as f32,
            })
            .collect(),
        player_left: lane_left(field.player_lane(), spacing),
        score: field.score(),
    }
}

pub fn content_view(page: &PageData, cfg: &GameConfig) -> ContentView {
    ContentView {
        heading: cfg.content.heading.clone(),
        cards: page
            .posts
            .iter()
            .map(|p| CardView {
                id: p.id.clone(),
                title: p.title.clone(),
                body: p.body.clone(),
                image: cfg.content.card_image.clone(),
            })
            .collect(),
    }
}

/// Three mutually exclusive branches keyed on the page state. `field` is only
/// read on the loading page; without one the field is drawn empty.
pub fn page_view(
    state: AppState,
    page: &PageData,
    field: Option<&BrickField>,
    cfg: &GameConfig,
) -> PageView {
    match state {
        AppState::Loading => PageView::Loading(
            field
                .map(|f| loading_view(f, cfg.minigame.lane_spacing))
                .unwrap_or_default(),
        ),
        AppState::Error => PageView::Error {
            message: page
                .error
                .clone()
                .unwrap_or_else(|| cfg.content.error_fallback.clone()),
        },
        AppState::Content => PageView::Content(content_view(page, cfg)),
    }
}

/// Confetti only ever shows over the posts; the game-over layer shows anywhere but
/// the error page.
pub fn overlays(state: AppState, confetti_active: bool, game: MinigameState) -> Overlays {
    Overlays {
        confetti: confetti_active && state == AppState::Content,
        game_over: game == MinigameState::GameOver && state != AppState::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::Post;

    fn page_with(posts: Vec<Post>) -> PageData {
        PageData { posts, error: None }
    }

    #[test]
    fn content_renders_one_card_per_post() {
        let cfg = GameConfig::default();
        let page = page_with(vec![Post {
            id: Number::from(1u64),
            title: "A".into(),
            body: "B".into(),
        }]);
        let view = page_view(AppState::Content, &page, None, &cfg);
        let PageView::Content(content) = view else {
            panic!("expected content view, got {view:?}");
        };
        assert_eq!(content.cards.len(), 1);
        assert_eq!(content.cards[0].title, "A");
        assert_eq!(content.cards[0].body, "B");
        assert_eq!(content.cards[0].image, "images/rubics.jpg");
        assert_eq!(content.heading, "API-FETCH POSTS");
    }

    #[test]
    fn error_view_shows_message_only() {
        let cfg = GameConfig::default();
        let page = PageData {
            posts: Vec::new(),
            error: Some("bad request".into()),
        };
        let view = page_view(AppState::Error, &page, None, &cfg);
        assert_eq!(
            view,
            PageView::Error {
                message: "bad request".into()
            }
        );
    }

    #[test]
    fn error_without_message_falls_back() {
        let cfg = GameConfig::default();
        let view = page_view(AppState::Error, &PageData::default(), None, &cfg);
        assert_eq!(
            view,
            PageView::Error {
                message: cfg.content.error_fallback.clone()
            }
        );
    }

    #[test]
    fn loading_without_field_is_empty() {
        let view = page_view(
            AppState::Loading,
            &PageData::default(),
            None,
            &GameConfig::default(),
        );
        assert_eq!(view, PageView::Loading(LoadingView::default()));
    }

    #[test]
    fn overlays_follow_page_and_game() {
        let over = MinigameState::GameOver;
        assert!(overlays(AppState::Loading, false, over).game_over);
        assert!(overlays(AppState::Content, false, over).game_over);
        assert!(!overlays(AppState::Error, false, over).game_over);
        assert!(!overlays(AppState::Content, false, MinigameState::Playing).game_over);

        assert!(overlays(AppState::Content, true, MinigameState::Playing).confetti);
        assert!(!overlays(AppState::Error, true, MinigameState::Playing).confetti);
        assert!(!overlays(AppState::Loading, true, MinigameState::Playing).confetti);
        assert!(!overlays(AppState::Content, false, MinigameState::Playing).confetti);
    }

    #[test]
    fn loading_view_places_bricks_by_lane_and_offset() {
        let mut field = BrickField::default();
        let id = field.push_brick(3, 120);
        let view = loading_view(&field, 60.0);
        assert_eq!(
            view.bricks,
            vec![BrickSprite {
                id,
                left: 180.0,
                top: 120.0
            }]
        );
        assert_eq!(view.player_left, 120.0);
        assert_eq!(score_label(view.score), "Score: 0");
    }
}
