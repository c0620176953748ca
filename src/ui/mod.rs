//! HUD and menu screens layered over the playfield

pub mod hud;
pub mod menu;

pub use hud::{HudStats, draw_game_over, draw_hud};
pub use menu::{Button, Choice, Menu};

use crate::renderer::{self, Canvas, DrawContext};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, LevelSource};

/// Compose one complete frame for the current phase
pub fn draw_frame<L: LevelSource>(
    canvas: &mut dyn Canvas,
    state: &GameState<L>,
    menu: &Menu,
    settings: &Settings,
) {
    let ctx = DrawContext {
        settings,
        tuning: &state.tuning,
    };
    renderer::draw_world(canvas, state, &ctx);

    if state.phase != GamePhase::MainMenu {
        let stats = HudStats {
            score: state.score,
            level: state.level,
            health: state.player.hull.health,
            max_health: state.player.hull.max_health,
        };
        draw_hud(canvas, &stats, settings, &state.tuning);
    }
    if state.phase == GamePhase::GameOver {
        draw_game_over(canvas, state.level, &state.tuning);
    }

    menu.draw(canvas, state.phase, &ctx);
}
