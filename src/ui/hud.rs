//! In-game heads-up display

use glam::Vec2;

use crate::renderer::{Anchor, Canvas, Color};
use crate::settings::Settings;
use crate::tuning::Tuning;

pub const TEXT_COLOR: Color = Color::WHITE;
pub const FONT_HUD: f32 = 48.0;
pub const FONT_HINT: f32 = 24.0;

const MARGIN: f32 = 10.0;
const LINE_SPACING: f32 = 20.0;

pub const CONTROLS_HINT: &str = "WASD: Move | Arrows: Aim | Space: Fire";

/// Values the HUD displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudStats {
    pub score: u64,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
}

/// Score, level and health down the left edge, controls hint top-right
pub fn draw_hud(canvas: &mut dyn Canvas, stats: &HudStats, settings: &Settings, tuning: &Tuning) {
    let lines = [
        format!("Score: {}", stats.score),
        format!("Level: {}", stats.level),
        format!("Health: {}/{}", stats.health, stats.max_health),
    ];
    for (i, line) in lines.iter().enumerate() {
        let pos = Vec2::new(MARGIN, MARGIN + i as f32 * LINE_SPACING);
        canvas.text(line, pos, Anchor::TopLeft, FONT_HUD, TEXT_COLOR);
    }

    if settings.show_controls {
        canvas.text(
            CONTROLS_HINT,
            Vec2::new(tuning.screen_width - MARGIN, MARGIN),
            Anchor::TopRight,
            FONT_HINT,
            TEXT_COLOR,
        );
    }
}

/// Game-over banner with the level the player reached
pub fn draw_game_over(canvas: &mut dyn Canvas, level: u32, tuning: &Tuning) {
    let center_x = (tuning.screen_width / 2.0).floor();
    let mid_y = (tuning.screen_height / 2.0).floor();
    canvas.text(
        "Game Over! Press R to Restart",
        Vec2::new(center_x, mid_y - 40.0),
        Anchor::Center,
        FONT_HUD,
        TEXT_COLOR,
    );
    canvas.text(
        &format!("You reached Level {level}"),
        Vec2::new(center_x, mid_y + 10.0),
        Anchor::Center,
        FONT_HUD,
        TEXT_COLOR,
    );
}
