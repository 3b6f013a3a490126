use bevy::prelude::*;
use bevy::color::Mix;

// Page chrome
pub const HEADING_LOADING: Color = Color::srgb(0.145, 0.388, 0.922); // blue 600
pub const HEADING_ERROR: Color = Color::srgb(0.863, 0.149, 0.149); // red 600
pub const MUTED_TEXT: Color = Color::srgb(0.294, 0.333, 0.388); // gray 600
pub const FIELD_BACKGROUND: Color = Color::srgb(0.82, 0.835, 0.859); // gray 300
pub const CARD_OVERLAY: Color = Color::srgba(0.067, 0.094, 0.153, 0.75); // gray 900 @ 75%
pub const CARD_BODY_TEXT: Color = Color::srgb(0.82, 0.835, 0.859);
pub const DIM_LAYER: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);

// Minigame pieces
pub const BRICK: Color = Color::srgb(0.937, 0.267, 0.267); // red 500
pub const PLAYER: Color = Color::srgb(0.231, 0.510, 0.965); // blue 500
pub const BUTTON: Color = Color::srgb(0.231, 0.510, 0.965);
pub const BUTTON_HOVER: Color = Color::srgb(0.145, 0.388, 0.922);

/// Heading gradient stops, left to right (indigo 900, purple 400, pink 400).
pub const HEADING_GRADIENT: [Color; 3] = [
    Color::srgb(0.192, 0.180, 0.506),
    Color::srgb(0.753, 0.518, 0.988),
    Color::srgb(0.957, 0.447, 0.714),
];

pub const CONFETTI_COLORS: [Color; 6] = [
    Color::srgb(0.937, 0.267, 0.267), // red
    Color::srgb(0.231, 0.510, 0.965), // blue
    Color::srgb(0.918, 0.702, 0.031), // yellow
    Color::srgb(0.133, 0.773, 0.369), // green
    Color::srgb(0.925, 0.282, 0.600), // pink
    Color::srgb(0.659, 0.333, 0.969), // purple
];

#[inline]
pub fn confetti_color(i: usize) -> Color {
    CONFETTI_COLORS[i % CONFETTI_COLORS.len()]
}

/// Linear blend across the heading stops; `t` in [0,1].
pub fn heading_gradient(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0) * (HEADING_GRADIENT.len() - 1) as f32;
    let i = (t.floor() as usize).min(HEADING_GRADIENT.len() - 2);
    let a = HEADING_GRADIENT[i].to_srgba();
    let b = HEADING_GRADIENT[i + 1].to_srgba();
    Color::Srgba(a.mix(&b, t - i as f32))
}
