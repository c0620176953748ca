//! Player and enemy ships
//!
//! Both ship kinds share a [`Hull`] (position, turret, cooldown, health) and
//! implement [`Ship`]. They differ only in where control comes from: the
//! player reads the input snapshot, enemies track the player.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::cannonball::{Cannonball, Owner, active_count};
use super::geometry::Obstacle;
use super::tick::Controls;
use crate::tuning::Tuning;
use crate::{angle_difference, angle_of, normalize_angle, unit_vector};

/// Everything a ship may look at during its per-frame update
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub controls: &'a Controls,
    /// Position of the opposing ship, `None` once it is dead
    pub target: Option<Vec2>,
    pub obstacles: &'a [Obstacle],
    /// Cannonballs already in flight (including ones fired earlier this frame)
    pub cannonballs: &'a [Cannonball],
    pub tuning: &'a Tuning,
}

/// State shared by every ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hull {
    pub pos: Vec2,
    /// Facing of the hull (cosmetic only)
    pub heading: f32,
    /// Turret angle (radians)
    pub turret: f32,
    pub radius: f32,
    /// Frames until the next shot is allowed
    pub cooldown: u32,
    pub health: u32,
    pub max_health: u32,
    /// Frames of hit flash remaining
    pub flash_timer: u32,
    pub alive: bool,
}

impl Hull {
    pub fn new(pos: Vec2, radius: f32, max_health: u32, cooldown: u32) -> Self {
        Self {
            pos,
            heading: 0.0,
            turret: 0.0,
            radius,
            cooldown,
            health: max_health,
            max_health,
            flash_timer: 0,
            alive: true,
        }
    }

    /// Turn the turret a fraction of the way toward `target_angle`.
    ///
    /// Proportional smoothing: the remaining error shrinks by `aim_speed`
    /// every frame, so the turret never jumps.
    pub fn aim_toward(&mut self, target_angle: f32, aim_speed: f32) {
        let diff = angle_difference(target_angle, self.turret);
        self.turret = normalize_angle(self.turret + diff * aim_speed);
    }

    /// Point where cannonballs leave the barrel
    pub fn muzzle(&self, turret_length: f32) -> Vec2 {
        self.pos + unit_vector(self.turret) * turret_length
    }

    fn tick_flash(&mut self) {
        self.flash_timer = self.flash_timer.saturating_sub(1);
    }

    fn tick_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Fire if the cooldown has elapsed and the owner is under its cap
    fn try_fire(&mut self, owner: Owner, interval: u32, frame: &Frame) -> Option<Cannonball> {
        let tuning = frame.tuning;
        if self.cooldown != 0 || !self.alive {
            return None;
        }
        if active_count(frame.cannonballs, owner) >= tuning.max_cannonballs {
            return None;
        }
        self.cooldown = interval;
        Some(Cannonball::fire(
            self.muzzle(tuning.turret_length),
            self.turret,
            owner,
            tuning,
        ))
    }

    /// Take one point of damage and start the hit flash.
    /// Returns true when this hit used up the last point of health.
    fn take_damage(&mut self, flash_duration: u32) -> bool {
        debug_assert!(self.health <= self.max_health);
        self.health = self.health.saturating_sub(1);
        self.flash_timer = flash_duration;
        self.health == 0
    }

    /// Whether the hull should be drawn in the flash color this frame
    pub fn flash_visible(&self) -> bool {
        self.flash_timer > 0 && self.flash_timer % 6 < 3
    }
}

/// Capabilities every ship offers to the simulation
pub trait Ship {
    fn hull(&self) -> &Hull;

    /// Advance one frame; returns a cannonball if the ship fired
    fn update(&mut self, frame: &Frame) -> Option<Cannonball>;

    /// Register a cannonball hit
    fn hit(&mut self, tuning: &Tuning);

    fn position(&self) -> Vec2 {
        self.hull().pos
    }

    fn is_alive(&self) -> bool {
        self.hull().alive
    }

    /// Whether cannonballs can still hit this ship
    fn is_targetable(&self) -> bool {
        self.is_alive()
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub hull: Hull,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            hull: Hull::new(
                tuning.player_spawn(),
                tuning.player_radius,
                tuning.max_health,
                0,
            ),
        }
    }

    /// Put the ship back at the spawn point with full health for a new level
    pub fn respawn(&mut self, tuning: &Tuning) {
        self.hull.pos = tuning.player_spawn();
        self.hull.health = self.hull.max_health;
        self.hull.flash_timer = 0;
    }

    /// Move along the held direction keys unless the move would touch an obstacle.
    ///
    /// A blocked move is rejected outright; there is no sliding along walls.
    fn steer(&mut self, controls: &Controls, obstacles: &[Obstacle], tuning: &Tuning) {
        let dir = controls.move_vector();
        if dir == Vec2::ZERO {
            return;
        }
        let step = dir.normalize() * tuning.player_speed;
        let next = self.hull.pos + step;
        let r = self.hull.radius;

        if obstacles.iter().any(|o| o.overlaps_square(next, r)) {
            return;
        }

        let max = tuning.screen() - Vec2::splat(r);
        self.hull.pos = next.clamp(Vec2::splat(r), max);
        self.hull.heading = angle_of(step);
    }
}

impl Ship for Player {
    fn hull(&self) -> &Hull {
        &self.hull
    }

    fn update(&mut self, frame: &Frame) -> Option<Cannonball> {
        if !self.hull.alive {
            return None;
        }
        let tuning = frame.tuning;

        self.hull.tick_flash();
        self.steer(frame.controls, frame.obstacles, tuning);

        let aim = frame.controls.aim_vector();
        if aim != Vec2::ZERO {
            self.hull.aim_toward(angle_of(aim), tuning.player_aim_speed);
        }

        self.hull.tick_cooldown();
        if frame.controls.fire {
            self.hull
                .try_fire(Owner::Player, tuning.player_fire_interval, frame)
        } else {
            None
        }
    }

    fn hit(&mut self, tuning: &Tuning) {
        if self.hull.take_damage(tuning.hit_flash_duration) {
            self.hull.alive = false;
            log::info!("Player ship sunk");
        }
    }
}

/// An AI-controlled enemy ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub hull: Hull,
    /// Playing the death animation; no longer fights or takes hits
    pub dying: bool,
    /// Frames left in the death animation
    pub death_timer: u32,
    /// Length of the death animation this enemy started with
    pub death_duration: u32,
}

impl Enemy {
    pub fn new(pos: Vec2, cooldown: u32, tuning: &Tuning) -> Self {
        Self {
            hull: Hull::new(pos, tuning.enemy_radius, tuning.max_health, cooldown),
            dying: false,
            death_timer: 0,
            death_duration: tuning.enemy_death_duration,
        }
    }

    /// Still fighting: alive and not sinking
    pub fn is_active(&self) -> bool {
        self.hull.alive && !self.dying
    }

    /// Death animation progress from 0 (just sunk) to 1 (gone)
    pub fn death_progress(&self) -> f32 {
        if !self.dying || self.death_duration == 0 {
            return 0.0;
        }
        1.0 - self.death_timer as f32 / self.death_duration as f32
    }

    fn advance_death(&mut self) {
        self.hull.tick_flash();
        self.death_timer = self.death_timer.saturating_sub(1);
        if self.death_timer == 0 {
            self.hull.alive = false;
        }
    }
}

impl Ship for Enemy {
    fn hull(&self) -> &Hull {
        &self.hull
    }

    fn update(&mut self, frame: &Frame) -> Option<Cannonball> {
        if !self.hull.alive {
            return None;
        }
        if self.dying {
            self.advance_death();
            return None;
        }
        let tuning = frame.tuning;

        self.hull.tick_flash();

        if let Some(target) = frame.target {
            let to_target = target - self.hull.pos;
            if to_target != Vec2::ZERO {
                self.hull
                    .aim_toward(angle_of(to_target), tuning.enemy_aim_speed);
            }
        }

        self.hull.tick_cooldown();
        // Hold fire once the player is gone
        frame.target?;
        self.hull
            .try_fire(Owner::Enemy, tuning.enemy_fire_interval, frame)
    }

    fn hit(&mut self, tuning: &Tuning) {
        if !self.is_active() {
            return;
        }
        if self.hull.take_damage(tuning.hit_flash_duration) {
            self.dying = true;
            self.death_duration = tuning.enemy_death_duration;
            self.death_timer = tuning.enemy_death_duration;
            if self.death_timer == 0 {
                self.hull.alive = false;
            }
            log::debug!("Enemy at ({:.0}, {:.0}) sinking", self.hull.pos.x, self.hull.pos.y);
        }
    }

    fn is_targetable(&self) -> bool {
        self.is_active()
    }
}
