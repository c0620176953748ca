//! Rendering module
//!
//! Backend-agnostic: the world is painted through the [`Canvas`] trait, so
//! a window backend and the headless [`DrawList`] share all drawing code.

pub mod canvas;
pub mod shapes;

pub use canvas::{Anchor, Canvas, Color, DrawCommand, DrawList, Fill};
pub use shapes::{Draw, DrawContext, palette};

use crate::sim::{GameState, LevelSource};

/// Paint the playfield: water, obstacles, cannonballs, then ships
pub fn draw_world<L: LevelSource>(canvas: &mut dyn Canvas, state: &GameState<L>, ctx: &DrawContext) {
    canvas.clear(ctx.water());

    for obstacle in &state.obstacles {
        obstacle.draw(canvas, ctx);
    }
    for cb in &state.cannonballs {
        cb.draw(canvas, ctx);
    }
    state.player.draw(canvas, ctx);
    for enemy in &state.enemies {
        enemy.draw(canvas, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_world_starts_with_clear_and_obstacles() {
        let state = GameState::new(11);
        // Health bar background shares the obstacle gray
        let settings = Settings {
            show_health_bars: false,
            ..Default::default()
        };
        let ctx = DrawContext {
            settings: &settings,
            tuning: &state.tuning,
        };
        let mut list = DrawList::new();
        draw_world(&mut list, &state, &ctx);

        assert_eq!(
            list.commands[0],
            DrawCommand::Clear {
                color: palette::WATER
            }
        );
        let obstacles = list
            .commands
            .iter()
            .filter(|cmd| {
                matches!(cmd, DrawCommand::Rect { color, fill: Fill::Solid, .. } if *color == palette::OBSTACLE)
            })
            .count();
        assert_eq!(obstacles, state.obstacles.len());
    }
}
