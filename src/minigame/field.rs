// This file is part of Brickfall Posts.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Falling-brick minigame state, independent of the ECS scheduling around it.
//!
//! One [`BrickField::tick`] is one step of the loop: advance, cull, maybe spawn,
//! catch, then the loss check. The loss check runs on the bricks left *after* the
//! catch, so two bricks meeting the threshold in the player's lane on the same
//! tick register one catch and end the game.

use bevy::prelude::*;
use rand::Rng;

/// Tunables for one field; derived from `MinigameConfig::rules`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickRules {
    pub lanes: u8,
    pub fall_step: u32,
    pub visible_limit: u32,
    pub catch_threshold: u32,
    pub spawn_chance: f64,
}

impl Default for BrickRules {
    fn default() -> Self {
        Self {
            lanes: 5,
            fall_step: 10,
            visible_limit: 300,
            catch_threshold: 280,
            spawn_chance: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brick {
    pub id: u64,
    pub lane: u8,
    pub offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneShift {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub spawned: Option<u64>,
    pub caught: Option<Brick>,
    pub game_over: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct BrickField {
    rules: BrickRules,
    bricks: Vec<Brick>,
    player_lane: u8,
    score: u32,
    game_over: bool,
    next_id: u64,
}

impl BrickField {
    pub fn new(rules: BrickRules, start_lane: u8) -> Self {
        let rules = BrickRules {
            lanes: rules.lanes.max(1),
            ..rules
        };
        Self {
            player_lane: start_lane.min(rules.lanes - 1),
            rules,
            bricks: Vec::new(),
            score: 0,
            game_over: false,
            next_id: 0,
        }
    }

    pub fn rules(&self) -> &BrickRules {
        &self.rules
    }
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }
    pub fn player_lane(&self) -> u8 {
        self.player_lane
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// One loop step with the spawn draw taken from `rng`.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickReport {
        if self.game_over {
            return TickReport {
                game_over: true,
                ..default()
            };
        }
        let spawn = if rng.gen_bool(self.rules.spawn_chance.clamp(0.0, 1.0)) {
            Some(rng.gen_range(0..self.rules.lanes))
        } else {
            None
        };
        self.tick_with_spawn(spawn)
    }

    /// Deterministic loop step; `spawn` is the lane of a new brick, if any.
    pub fn tick_with_spawn(&mut self, spawn: Option<u8>) -> TickReport {
        if self.game_over {
            return TickReport {
                game_over: true,
                ..default()
            };
        }
        let mut report = TickReport::default();
        let step = self.rules.fall_step;
        let limit = self.rules.visible_limit;

        for brick in &mut self.bricks {
            brick.offset = brick.offset.saturating_add(step);
        }
        self.bricks.retain(|b| b.offset < limit);

        if let Some(lane) = spawn {
            let lane = lane.min(self.rules.lanes - 1);
            report.spawned = Some(self.push_brick(lane, 0));
        }

        if let Some(idx) = self.bricks.iter().position(|b| self.in_reach(b)) {
            let caught = self.bricks.remove(idx);
            self.score += 1;
            report.caught = Some(caught);
        }

        if self.bricks.iter().any(|b| self.in_reach(b)) {
            self.game_over = true;
            report.game_over = true;
        }
        report
    }

    /// Returns true when the lane actually changed.
    pub fn shift(&mut self, shift: LaneShift) -> bool {
        if self.game_over {
            return false;
        }
        let before = self.player_lane;
        self.player_lane = match shift {
            LaneShift::Left => self.player_lane.saturating_sub(1),
            LaneShift::Right => (self.player_lane + 1).min(self.rules.lanes - 1),
        };
        before != self.player_lane
    }

    /// Score and bricks reset; the player stays in their lane.
    pub fn restart(&mut self) {
        self.bricks.clear();
        self.score = 0;
        self.game_over = false;
    }

    /// Places a brick directly; lane is clamped into the field.
    pub fn push_brick(&mut self, lane: u8, offset: u32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.bricks.push(Brick {
            id,
            lane: lane.min(self.rules.lanes - 1),
            offset,
        });
        id
    }

    fn in_reach(&self, brick: &Brick) -> bool {
        brick.offset >= self.rules.catch_threshold && brick.lane == self.player_lane
    }
}

impl Default for BrickField {
    fn default() -> Self {
        Self::new(BrickRules::default(), 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn catch_at_threshold_in_player_lane() {
        let mut field = BrickField::default();
        let id = field.push_brick(2, 270);
        let report = field.tick_with_spawn(None);
        assert_eq!(report.caught.map(|b| b.id), Some(id));
        assert_eq!(field.score(), 1);
        assert!(field.bricks().is_empty());
        assert!(!report.game_over);
    }

    #[test]
    fn brick_in_other_lane_passes_and_leaves_at_limit() {
        let mut field = BrickField::default();
        field.push_brick(0, 280);
        field.tick_with_spawn(None);
        assert_eq!(field.bricks()[0].offset, 290);
        field.tick_with_spawn(None);
        assert!(field.bricks().is_empty());
        assert_eq!(field.score(), 0);
        assert!(!field.is_game_over());
    }

    #[test]
    fn brick_past_threshold_catchable_until_culled() {
        let mut field = BrickField::default();
        field.push_brick(3, 280);
        field.tick_with_spawn(None);
        assert!(field.shift(LaneShift::Right));
        field.tick_with_spawn(None);
        // brick was at 290 and is now culled before the catch check
        assert_eq!(field.score(), 0);

        let mut field = BrickField::default();
        field.push_brick(3, 270);
        field.tick_with_spawn(None);
        assert_eq!(field.score(), 0);
        field.shift(LaneShift::Right);
        let report = field.tick_with_spawn(None);
        assert!(report.caught.is_some());
        assert_eq!(field.score(), 1);
    }

    #[test]
    fn two_bricks_in_reach_catch_one_then_game_over() {
        let mut field = BrickField::default();
        let first = field.push_brick(2, 280);
        field.push_brick(2, 270);
        let report = field.tick_with_spawn(None);
        assert_eq!(report.caught.map(|b| b.id), Some(first));
        assert!(report.game_over);
        assert_eq!(field.score(), 1);
        assert!(field.is_game_over());
        assert_eq!(field.bricks().len(), 1);
    }

    #[test]
    fn game_over_freezes_bricks_and_input() {
        let mut field = BrickField::default();
        field.push_brick(2, 280);
        field.push_brick(2, 280);
        field.tick_with_spawn(None);
        let frozen = field.bricks().to_vec();
        let report = field.tick_with_spawn(Some(1));
        assert!(report.game_over);
        assert_eq!(report.spawned, None);
        assert_eq!(field.bricks(), frozen.as_slice());
        assert!(!field.shift(LaneShift::Left));
        assert_eq!(field.player_lane(), 2);
    }

    #[test]
    fn restart_resets_score_flag_and_bricks() {
        let mut field = BrickField::default();
        field.push_brick(2, 280);
        field.push_brick(2, 280);
        field.shift(LaneShift::Left);
        field.shift(LaneShift::Right);
        field.tick_with_spawn(None);
        assert!(field.is_game_over());
        field.restart();
        assert_eq!(field.score(), 0);
        assert!(!field.is_game_over());
        assert!(field.bricks().is_empty());
        assert_eq!(field.player_lane(), 2);
    }

    #[test]
    fn lane_clamps_at_both_edges() {
        let mut field = BrickField::default();
        for _ in 0..10 {
            field.shift(LaneShift::Left);
        }
        assert_eq!(field.player_lane(), 0);
        assert!(!field.shift(LaneShift::Left));
        for _ in 0..10 {
            field.shift(LaneShift::Right);
        }
        assert_eq!(field.player_lane(), 4);
        assert!(!field.shift(LaneShift::Right));
    }

    #[test]
    fn spawned_brick_starts_at_top() {
        let mut field = BrickField::default();
        let report = field.tick_with_spawn(Some(4));
        let id = report.spawned.unwrap();
        let brick = field.bricks().iter().find(|b| b.id == id).unwrap();
        assert_eq!(brick.offset, 0);
        assert_eq!(brick.lane, 4);
        let next = field.tick_with_spawn(Some(9)).spawned.unwrap();
        assert_ne!(id, next);
        assert_eq!(field.bricks().iter().find(|b| b.id == next).unwrap().lane, 4);
    }

    #[test]
    fn random_play_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = BrickField::new(
            BrickRules {
                spawn_chance: 0.6,
                ..default()
            },
            2,
        );
        let mut last_score = 0;
        let mut offsets = std::collections::HashMap::new();
        for i in 0..5_000 {
            if i % 3 == 0 {
                let shift = if rng.gen_bool(0.5) {
                    LaneShift::Left
                } else {
                    LaneShift::Right
                };
                field.shift(shift);
            }
            let report = field.tick(&mut rng);
            assert!(field.player_lane() < 5);
            for b in field.bricks() {
                assert!(b.lane < 5);
                if let Some(prev) = offsets.insert(b.id, b.offset) {
                    assert!(b.offset >= prev);
                }
            }
            let expected = last_score + u32::from(report.caught.is_some());
            assert_eq!(field.score(), expected);
            last_score = field.score();
            if field.is_game_over() {
                field.restart();
                last_score = 0;
            }
        }
    }
}
