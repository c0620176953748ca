//! Sea-Ping Warfare - a top-down naval arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ships, cannonballs, collisions, game state)
//! - `renderer`: Canvas abstraction and entity drawing
//! - `ui`: HUD and menu screens
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences
//! - `autopilot`: Scripted player for demos

pub mod autopilot;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Fixed simulation rate (one step per frame)
    pub const FPS: u32 = 60;

    /// Player ship
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PLAYER_RADIUS: f32 = 22.0;
    /// Player spawns centered horizontally, this far above the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 80.0;
    pub const PLAYER_FIRE_INTERVAL: u32 = 15;
    /// Fraction of the remaining turret error closed per frame
    pub const PLAYER_AIM_SPEED: f32 = 0.1;

    /// Enemy ships
    pub const ENEMY_RADIUS: f32 = 22.0;
    pub const ENEMY_FIRE_INTERVAL: u32 = 180;
    pub const ENEMY_AIM_SPEED: f32 = 0.05;
    /// Frames an enemy spends shrinking and flashing before it is removed
    pub const ENEMY_DEATH_DURATION: u32 = 45;

    /// Shared ship values
    pub const TURRET_LENGTH: f32 = 28.0;
    pub const MAX_HEALTH: u32 = 3;
    pub const HIT_FLASH_DURATION: u32 = 30;

    /// Cannonballs
    pub const CANNONBALL_RADIUS: f32 = 7.0;
    pub const CANNONBALL_SPEED: f32 = 8.0;
    pub const CANNONBALL_MAX_BOUNCES: u32 = 2;
    pub const CANNONBALL_LIFETIME: i32 = 300;
    /// Active cannonballs allowed per owner faction
    pub const MAX_CANNONBALLS: usize = 2;

    /// Score bonus per level index reached
    pub const LEVEL_BONUS: u64 = 10;
}

/// Normalize angle to [-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

/// Shortest signed rotation that takes `from` onto `to`
#[inline]
pub fn angle_difference(to: f32, from: f32) -> f32 {
    normalize_angle(to - from)
}

/// Unit vector pointing along `angle`
#[inline]
pub fn unit_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle of a vector (atan2 convention, y down is positive)
#[inline]
pub fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
