//! Entity drawing
//!
//! Each simulation entity knows how to paint itself onto a [`Canvas`].

use glam::Vec2;

use super::canvas::{Canvas, Color, Fill};
use crate::settings::Settings;
use crate::sim::{Cannonball, Enemy, Hull, Obstacle, Owner, Player};
use crate::tuning::Tuning;
use crate::unit_vector;

/// Fixed color palette
pub mod palette {
    use super::Color;

    pub const WATER: Color = Color::rgb(30, 60, 90);
    pub const OBSTACLE: Color = Color::rgb(80, 80, 80);
    pub const PLAYER: Color = Color::rgb(0, 200, 255);
    pub const PLAYER_TURRET: Color = Color::rgb(0, 255, 255);
    pub const ENEMY: Color = Color::rgb(255, 80, 80);
    pub const ENEMY_TURRET: Color = Color::rgb(200, 0, 0);
    pub const PLAYER_SHOT: Color = Color::rgb(30, 144, 255);
    pub const ENEMY_SHOT: Color = Color::rgb(255, 100, 40);
    pub const FLASH: Color = Color::WHITE;
    pub const HEALTH_BACK: Color = Color::rgb(80, 80, 80);
    pub const HEALTH_FILL: Color = Color::rgb(0, 255, 0);

    /// High contrast swaps
    pub const HC_OBSTACLE: Color = Color::rgb(200, 200, 200);
    pub const HC_WATER: Color = Color::rgb(0, 0, 0);
}

/// Extra length of the player's barrel beyond the firing point
const PLAYER_BARREL_EXTENSION: f32 = 10.0;
const PLAYER_BARREL_WIDTH: f32 = 10.0;
const ENEMY_BARREL_WIDTH: f32 = 8.0;
const RETICLE_DISTANCE: f32 = 120.0;
const RETICLE_RADIUS: f32 = 6.0;

const HEALTH_BAR_WIDTH: f32 = 60.0;
const HEALTH_BAR_HEIGHT: f32 = 8.0;
/// Gap between the top of the hull and the health bar
const HEALTH_BAR_GAP: f32 = 20.0;

/// Read-only context shared by every draw call of a frame
#[derive(Debug, Clone, Copy)]
pub struct DrawContext<'a> {
    pub settings: &'a Settings,
    pub tuning: &'a Tuning,
}

impl DrawContext<'_> {
    pub fn water(&self) -> Color {
        if self.settings.high_contrast {
            palette::HC_WATER
        } else {
            palette::WATER
        }
    }
}

/// Something that can paint itself
pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas, ctx: &DrawContext);
}

/// Hull color for this frame, white while a hit flash is showing
fn hull_color(hull: &Hull, base: Color, ctx: &DrawContext) -> Color {
    if ctx.settings.effective_hit_flash() && hull.flash_visible() {
        palette::FLASH
    } else {
        base
    }
}

impl Draw for Obstacle {
    fn draw(&self, canvas: &mut dyn Canvas, ctx: &DrawContext) {
        let color = if ctx.settings.high_contrast {
            palette::HC_OBSTACLE
        } else {
            palette::OBSTACLE
        };
        canvas.rect(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
            color,
            Fill::Solid,
        );
    }
}

impl Draw for Cannonball {
    fn draw(&self, canvas: &mut dyn Canvas, _ctx: &DrawContext) {
        if !self.alive {
            return;
        }
        let color = match self.owner {
            Owner::Player => palette::PLAYER_SHOT,
            Owner::Enemy => palette::ENEMY_SHOT,
        };
        canvas.circle(self.pos, self.radius, color, Fill::Solid);
    }
}

impl Player {
    /// Segmented bar above the hull, one segment per health point
    fn draw_health_bar(&self, canvas: &mut dyn Canvas) {
        let hull = &self.hull;
        let origin = Vec2::new(
            hull.pos.x - HEALTH_BAR_WIDTH / 2.0,
            hull.pos.y - hull.radius - HEALTH_BAR_GAP,
        );
        let size = Vec2::new(HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT);
        canvas.rect(origin, size, palette::HEALTH_BACK, Fill::Solid);

        if hull.max_health > 0 {
            let segment = (HEALTH_BAR_WIDTH / hull.max_health as f32).floor();
            for i in 0..hull.health {
                canvas.rect(
                    origin + Vec2::new(i as f32 * segment, 0.0),
                    Vec2::new(segment - 1.0, HEALTH_BAR_HEIGHT),
                    palette::HEALTH_FILL,
                    Fill::Solid,
                );
            }
        }
        canvas.rect(origin, size, Color::WHITE, Fill::Outline(1.0));
    }
}

impl Draw for Player {
    fn draw(&self, canvas: &mut dyn Canvas, ctx: &DrawContext) {
        let hull = &self.hull;
        if !hull.alive {
            return;
        }
        let color = hull_color(hull, palette::PLAYER, ctx);
        canvas.circle(hull.pos, hull.radius, color, Fill::Solid);

        let dir = unit_vector(hull.turret);
        let tip = hull.pos + dir * (ctx.tuning.turret_length + PLAYER_BARREL_EXTENSION);
        canvas.line(hull.pos, tip, PLAYER_BARREL_WIDTH, palette::PLAYER_TURRET);

        if ctx.settings.show_reticle {
            canvas.circle(
                hull.pos + dir * RETICLE_DISTANCE,
                RETICLE_RADIUS,
                palette::PLAYER_TURRET,
                Fill::Outline(2.0),
            );
        }
        if ctx.settings.show_health_bars {
            self.draw_health_bar(canvas);
        }
    }
}

impl Draw for Enemy {
    fn draw(&self, canvas: &mut dyn Canvas, ctx: &DrawContext) {
        let hull = &self.hull;
        if !hull.alive {
            return;
        }

        if self.dying {
            // Sink: shrink and fade into the water
            let progress = self.death_progress();
            let radius = hull.radius * (1.0 - progress);
            let base = hull_color(hull, palette::ENEMY, ctx);
            let color = base.lerp(ctx.water(), progress);
            canvas.circle(hull.pos, radius, color, Fill::Solid);
            return;
        }

        let color = hull_color(hull, palette::ENEMY, ctx);
        canvas.circle(hull.pos, hull.radius, color, Fill::Solid);
        let tip = hull.muzzle(ctx.tuning.turret_length);
        canvas.line(hull.pos, tip, ENEMY_BARREL_WIDTH, palette::ENEMY_TURRET);
    }
}
