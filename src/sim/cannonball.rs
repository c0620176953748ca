//! Cannonball projectile physics
//!
//! Constant-velocity movement with reflection off the screen edges and off
//! obstacle rectangles. A ball dies once it has bounced more than the tuned
//! maximum, once its lifetime runs out, or when it scores a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Edge, Obstacle, reflect_away};
use crate::tuning::Tuning;
use crate::unit_vector;

/// Faction that fired a cannonball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// A cannonball in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cannonball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub bounces: u32,
    pub owner: Owner,
    /// Frames left before the ball sinks
    pub lifetime: i32,
    pub alive: bool,
}

impl Cannonball {
    /// Fire a ball from `pos` heading along `angle`
    pub fn fire(pos: Vec2, angle: f32, owner: Owner, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: unit_vector(angle) * tuning.cannonball_speed,
            radius: tuning.cannonball_radius,
            bounces: 0,
            owner,
            lifetime: tuning.cannonball_lifetime,
            alive: true,
        }
    }

    /// Advance one frame: move, reflect, and age the ball
    pub fn advance(&mut self, obstacles: &[Obstacle], tuning: &Tuning) {
        if !self.alive {
            return;
        }

        self.pos += self.vel;
        self.lifetime -= 1;

        self.bounce_off_screen(tuning.screen());
        self.bounce_off_obstacles(obstacles);

        if self.bounces > tuning.max_bounces || self.lifetime <= 0 {
            self.alive = false;
        }
    }

    /// Reflect off the playfield edges; each axis is handled independently
    fn bounce_off_screen(&mut self, screen: Vec2) {
        let r = self.radius;

        // Screen walls face inward, so a wall's normal is its edge's opposite
        if self.pos.x - r < 0.0 {
            self.pos.x = r;
            self.bounce(Edge::Right);
        } else if self.pos.x + r > screen.x {
            self.pos.x = screen.x - r;
            self.bounce(Edge::Left);
        }

        if self.pos.y - r < 0.0 {
            self.pos.y = r;
            self.bounce(Edge::Bottom);
        } else if self.pos.y + r > screen.y {
            self.pos.y = screen.y - r;
            self.bounce(Edge::Top);
        }
    }

    /// Push the ball out of the first obstacle its center lies inside.
    ///
    /// At most one obstacle is resolved per frame; overlapping rectangles or a
    /// fast ball clipping a corner can leave it slightly misplaced.
    fn bounce_off_obstacles(&mut self, obstacles: &[Obstacle]) {
        let Some(rect) = obstacles.iter().find(|rect| rect.contains_point(self.pos)) else {
            return;
        };

        let r = self.radius;
        let (edge, _) = rect.nearest_edge(self.pos);
        match edge {
            Edge::Left => self.pos.x = rect.left() - r,
            Edge::Right => self.pos.x = rect.right() + r,
            Edge::Top => self.pos.y = rect.top() - r,
            Edge::Bottom => self.pos.y = rect.bottom() + r,
        }
        self.bounce(edge);
    }

    /// Turn away from a surface whose outward side is `edge`
    fn bounce(&mut self, edge: Edge) {
        self.vel = reflect_away(self.vel, edge.outward_normal());
        self.record_bounce();
    }

    fn record_bounce(&mut self) {
        debug_assert!(self.bounces < u32::MAX, "bounce counter overflow");
        self.bounces += 1;
    }
}

/// Number of live cannonballs fired by `owner`
pub fn active_count(cannonballs: &[Cannonball], owner: Owner) -> usize {
    cannonballs
        .iter()
        .filter(|c| c.alive && c.owner == owner)
        .count()
}
