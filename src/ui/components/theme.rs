//! Shared UI color constants.

use ratatui::style::{Color, Style};

pub const BG_BASE: Color = Color::Rgb(253, 246, 240);
pub const BG_SURFACE: Color = Color::Rgb(255, 255, 255);

pub const TEXT_PRIMARY: Color = Color::Rgb(58, 40, 48);
pub const TEXT_MUTED: Color = Color::Rgb(128, 98, 108);
pub const TEXT_FAINT: Color = Color::Rgb(190, 170, 175);

pub const ACCENT_PRIMARY: Color = Color::Rgb(214, 80, 112);
pub const ACCENT_BLUSH: Color = Color::Rgb(242, 180, 190);
pub const ACCENT_LAVENDER: Color = Color::Rgb(206, 190, 235);

pub const HEADER_BG: Color = Color::Rgb(248, 236, 230);
pub const FOOTER_BG: Color = Color::Rgb(248, 236, 230);
pub const KEY_HINT_BG: Color = Color::Rgb(236, 214, 214);

/// Blend `color` toward the page background; `t` is 0.0 (background) to
/// 1.0 (full color). Non-RGB colors are returned unchanged.
pub fn fade(color: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (color, BG_BASE) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            Color::Rgb(lerp(br, r, t), lerp(bg, g, t), lerp(bb, b, t))
        }
        _ => color,
    }
}

/// Foreground style for `color` at the given opacity
pub fn fg(color: Color, opacity: f32) -> Style {
    Style::default().fg(fade(color, opacity))
}

/// Linear interpolation between two u8 values
fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
