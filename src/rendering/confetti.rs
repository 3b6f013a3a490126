// This file is part of Brickfall Posts.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Celebration overlay shown when the fetch settles.
//!
//! The visibility flag (`ConfettiTimer`) is raised for every outcome; the pieces
//! are only drawn on the content page. Each piece pops once (scale, fall, spin)
//! over its own random duration, then stays hidden until the flag expires.

use bevy::prelude::*;
use rand::Rng;

use super::palette::palette;
use super::view::overlays;
use crate::app::state::{AppState, MinigameState};
use crate::core::config::{ConfettiConfig, GameConfig};
use crate::core::system::system_order::PresentationSet;
use crate::fetch::FetchCompleted;

pub struct ConfettiPlugin;

impl Plugin for ConfettiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                start_confetti,
                spawn_confetti,
                animate_confetti,
                expire_confetti,
            )
                .chain()
                .in_set(PresentationSet),
        )
        .add_systems(OnExit(AppState::Content), despawn_confetti_pieces);
    }
}

/// One-shot visibility window for the overlay.
#[derive(Resource, Debug)]
pub struct ConfettiTimer {
    pub timer: Timer,
    spawned: bool,
}

impl ConfettiTimer {
    pub fn new(secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(secs.max(0.0), TimerMode::Once),
            spawned: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.timer.finished()
    }
}

#[derive(Component)]
pub struct ConfettiRoot;

#[derive(Component, Debug, Clone, Copy)]
pub struct ConfettiPiece {
    pub elapsed: f32,
    pub duration: f32,
}

/// cubic-bezier(0.25, 0.46, 0.45, 0.94) is the usual approximation of this curve.
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Scale, downward travel and rotation (radians) of a piece at progress `t`.
pub fn piece_pose(t: f32, cfg: &ConfettiConfig) -> (f32, f32, f32) {
    let e = ease_out_quad(t);
    let scale = 1.0 + (cfg.peak_scale - 1.0) * e;
    let fall = cfg.fall_distance * e;
    let angle = cfg.spin_degrees.to_radians() * e;
    (scale, fall, angle)
}

fn confetti_cfg(cfg: Option<&GameConfig>) -> ConfettiConfig {
    cfg.map(|c| c.confetti.clone()).unwrap_or_default()
}

fn start_confetti(
    mut commands: Commands,
    mut events: EventReader<FetchCompleted>,
    cfg: Option<Res<GameConfig>>,
) {
    if events.read().count() == 0 {
        return;
    }
    let c = confetti_cfg(cfg.as_deref());
    if c.duration_secs <= 0.0 {
        return;
    }
    info!(target: "ui", "confetti for {:.1}s", c.duration_secs);
    commands.insert_resource(ConfettiTimer::new(c.duration_secs));
}

fn spawn_confetti(
    mut commands: Commands,
    timer: Option<ResMut<ConfettiTimer>>,
    page: Res<State<AppState>>,
    game: Res<State<MinigameState>>,
    cfg: Option<Res<GameConfig>>,
) {
    let Some(mut timer) = timer else { return; };
    if timer.spawned || !overlays(*page.get(), timer.is_active(), *game.get()).confetti {
        return;
    }
    timer.spawned = true;

    let c = confetti_cfg(cfg.as_deref());
    let mut rng = rand::thread_rng();
    let (lo, hi) = (c.min_anim_secs.min(c.max_anim_secs), c.max_anim_secs.max(c.min_anim_secs));
    commands
        .spawn((
            ConfettiRoot,
            Name::new("Confetti"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            GlobalZIndex(10),
        ))
        .with_children(|root| {
            for _ in 0..c.pieces {
                let duration = if lo < hi { rng.gen_range(lo..hi) } else { lo.max(0.01) };
                root.spawn((
                    ConfettiPiece {
                        elapsed: 0.0,
                        duration,
                    },
                    Node {
                        position_type: PositionType::Absolute,
                        width: Val::Px(10.0),
                        height: Val::Px(25.0),
                        left: Val::Percent(rng.gen::<f32>() * 100.0),
                        top: Val::Percent(rng.gen::<f32>() * 100.0),
                        ..default()
                    },
                    BorderRadius::MAX,
                    BackgroundColor(palette::confetti_color(rng.gen_range(0..palette::CONFETTI_COLORS.len()))),
                ));
            }
        });
}

fn animate_confetti(
    time: Res<Time>,
    cfg: Option<Res<GameConfig>>,
    mut q: Query<(&mut ConfettiPiece, &mut Node, &mut Transform, &mut Visibility)>,
) {
    let c = confetti_cfg(cfg.as_deref());
    let dt = time.delta_secs();
    for (mut piece, mut node, mut transform, mut vis) in &mut q {
        if piece.elapsed >= piece.duration {
            continue;
        }
        piece.elapsed += dt;
        let t = piece.elapsed / piece.duration;
        if t >= 1.0 {
            vis.set_if_neq(Visibility::Hidden);
            continue;
        }
        let (scale, fall, angle) = piece_pose(t, &c);
        node.margin.top = Val::Px(fall);
        transform.scale = Vec3::splat(scale);
        transform.rotation = Quat::from_rotation_z(angle);
    }
}

fn expire_confetti(
    mut commands: Commands,
    time: Res<Time>,
    timer: Option<ResMut<ConfettiTimer>>,
    q_root: Query<Entity, With<ConfettiRoot>>,
) {
    let Some(mut timer) = timer else { return; };
    timer.timer.tick(time.delta());
    if timer.timer.finished() {
        for e in &q_root {
            commands.entity(e).despawn();
        }
        commands.remove_resource::<ConfettiTimer>();
        debug!(target: "ui", "confetti expired");
    }
}

fn despawn_confetti_pieces(mut commands: Commands, q_root: Query<Entity, With<ConfettiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
