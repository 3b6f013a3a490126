// This file is part of Brickfall Posts.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

use crate::minigame::field::BrickRules;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Brickfall Posts".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub filter: String,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            filter: "wgpu=error,naga=warn,reqwest=warn".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub path: String,
    /// `None` leaves the transport's own timeout in place.
    pub timeout_secs: Option<f32>,
}
impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".into(),
            path: "/api/external".into(),
            timeout_secs: None,
        }
    }
}
impl ApiConfig {
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|s| s.is_finite() && *s > 0.0)
            .map(Duration::from_secs_f32)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MinigameConfig {
    pub lanes: u8,
    pub start_lane: u8,
    pub tick_ms: u64,
    pub fall_step: u32,
    pub visible_limit: u32,
    pub catch_threshold: u32,
    pub spawn_chance: f64,
    pub lane_spacing: f32,
    pub brick_size: f32,
    pub field_height: f32,
}
impl Default for MinigameConfig {
    fn default() -> Self {
        Self {
            lanes: 5,
            start_lane: 2,
            tick_ms: 100,
            fall_step: 10,
            visible_limit: 300,
            catch_threshold: 280,
            spawn_chance: 0.2,
            lane_spacing: 60.0,
            brick_size: 50.0,
            field_height: 400.0,
        }
    }
}
impl MinigameConfig {
    pub fn rules(&self) -> BrickRules {
        BrickRules {
            lanes: self.lanes.max(1),
            fall_step: self.fall_step,
            visible_limit: self.visible_limit,
            catch_threshold: self.catch_threshold,
            spawn_chance: self.spawn_chance.clamp(0.0, 1.0),
        }
    }

    pub fn clamped_start_lane(&self) -> u8 {
        self.start_lane.min(self.lanes.max(1) - 1)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConfettiConfig {
    pub duration_secs: f32,
    pub pieces: usize,
    pub min_anim_secs: f32,
    pub max_anim_secs: f32,
    pub fall_distance: f32,
    pub peak_scale: f32,
    pub spin_degrees: f32,
}
impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            duration_secs: 5.0,
            pieces: 1200,
            min_anim_secs: 3.0,
            max_anim_secs: 6.0,
            fall_distance: 300.0,
            peak_scale: 2.0,
            spin_degrees: 720.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    pub heading: String,
    pub card_image: String,
    pub columns: u16,
    pub card_height: f32,
    pub error_fallback: String,
}
impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            heading: "API-FETCH POSTS".into(),
            card_image: "images/rubics.jpg".into(),
            columns: 3,
            card_height: 300.0,
            error_fallback: "An unexpected error occurred".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub log: LogConfig,
    pub api: ApiConfig,
    pub minigame: MinigameConfig,
    pub confetti: ConfettiConfig,
    pub content: ContentConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Non-fatal sanity checks; every entry is a human-readable warning.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        let m = &self.minigame;
        if m.lanes == 0 {
            w.push("minigame.lanes is 0; using a single lane".into());
        }
        if m.lanes > 0 && m.start_lane >= m.lanes {
            w.push(format!(
                "minigame.start_lane {} outside 0..{}; clamping",
                m.start_lane, m.lanes
            ));
        }
        if m.tick_ms == 0 {
            w.push("minigame.tick_ms is 0; using 1ms".into());
        }
        if !(0.0..=1.0).contains(&m.spawn_chance) {
            w.push(format!(
                "minigame.spawn_chance {} outside [0,1]; clamping",
                m.spawn_chance
            ));
        }
        if m.fall_step == 0 {
            w.push("minigame.fall_step is 0; bricks will never fall".into());
        }
        if m.catch_threshold >= m.visible_limit {
            w.push(format!(
                "minigame.catch_threshold {} >= visible_limit {}; bricks leave before they can be caught",
                m.catch_threshold, m.visible_limit
            ));
        }
        let c = &self.confetti;
        if c.min_anim_secs > c.max_anim_secs {
            w.push(format!(
                "confetti.min_anim_secs {} > max_anim_secs {}",
                c.min_anim_secs, c.max_anim_secs
            ));
        }
        if c.duration_secs <= 0.0 {
            w.push("confetti.duration_secs <= 0; confetti disabled".into());
        }
        if self.content.columns == 0 {
            w.push("content.columns is 0; using 1 column".into());
        }
        if self.api.base_url.trim().is_empty() {
            w.push("api.base_url is empty".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_single_slash() {
        let mut api = ApiConfig::default();
        assert_eq!(api.endpoint(), "http://127.0.0.1:3000/api/external");
        api.base_url = "http://example.test/".into();
        api.path = "api/external".into();
        assert_eq!(api.endpoint(), "http://example.test/api/external");
        api.path = String::new();
        assert_eq!(api.endpoint(), "http://example.test");
    }

    #[test]
    fn non_positive_timeout_means_transport_default() {
        let mut api = ApiConfig::default();
        assert_eq!(api.timeout(), None);
        api.timeout_secs = Some(0.0);
        assert_eq!(api.timeout(), None);
        api.timeout_secs = Some(2.5);
        assert_eq!(api.timeout(), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn defaults_validate_clean() {
        assert!(GameConfig::default().validate().is_empty());
    }

    #[test]
    fn start_lane_clamped_into_range() {
        let m = MinigameConfig {
            lanes: 3,
            start_lane: 9,
            ..Default::default()
        };
        assert_eq!(m.clamped_start_lane(), 2);
        let zero = MinigameConfig {
            lanes: 0,
            ..Default::default()
        };
        assert_eq!(zero.clamped_start_lane(), 0);
        assert_eq!(zero.rules().lanes, 1);
    }
}
