//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads. Defaults come from
//! [`crate::consts`]; a JSON file may override any subset of fields.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

const MIN_SCREEN_WIDTH: f32 = 200.0;
const MIN_SCREEN_HEIGHT: f32 = 300.0;

/// Errors raised while loading or validating a tuning file
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(err) => write!(f, "failed to read tuning file: {err}"),
            TuningError::Parse(err) => write!(f, "malformed tuning JSON: {err}"),
            TuningError::Invalid { field, reason } => {
                write!(f, "invalid tuning value `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(err) => Some(err),
            TuningError::Parse(err) => Some(err),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(err: std::io::Error) -> Self {
        TuningError::Io(err)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err)
    }
}

/// Gameplay constants, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,

    // === Player ===
    pub player_speed: f32,
    pub player_radius: f32,
    pub player_spawn_offset: f32,
    pub player_fire_interval: u32,
    pub player_aim_speed: f32,

    // === Enemies ===
    pub enemy_radius: f32,
    pub enemy_fire_interval: u32,
    pub enemy_aim_speed: f32,
    pub enemy_death_duration: u32,

    // === Ships ===
    pub turret_length: f32,
    pub max_health: u32,
    pub hit_flash_duration: u32,

    // === Cannonballs ===
    pub cannonball_radius: f32,
    pub cannonball_speed: f32,
    pub max_bounces: u32,
    pub cannonball_lifetime: i32,
    pub max_cannonballs: usize,

    // === Scoring ===
    pub level_bonus: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,

            player_speed: PLAYER_SPEED,
            player_radius: PLAYER_RADIUS,
            player_spawn_offset: PLAYER_SPAWN_OFFSET,
            player_fire_interval: PLAYER_FIRE_INTERVAL,
            player_aim_speed: PLAYER_AIM_SPEED,

            enemy_radius: ENEMY_RADIUS,
            enemy_fire_interval: ENEMY_FIRE_INTERVAL,
            enemy_aim_speed: ENEMY_AIM_SPEED,
            enemy_death_duration: ENEMY_DEATH_DURATION,

            turret_length: TURRET_LENGTH,
            max_health: MAX_HEALTH,
            hit_flash_duration: HIT_FLASH_DURATION,

            cannonball_radius: CANNONBALL_RADIUS,
            cannonball_speed: CANNONBALL_SPEED,
            max_bounces: CANNONBALL_MAX_BOUNCES,
            cannonball_lifetime: CANNONBALL_LIFETIME,
            max_cannonballs: MAX_CANNONBALLS,

            level_bonus: LEVEL_BONUS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document (missing fields keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break the physics step
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }
        fn unit_interval(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must lie in (0, 1]",
                })
            }
        }

        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("player_speed", self.player_speed)?;
        positive("player_radius", self.player_radius)?;
        positive("enemy_radius", self.enemy_radius)?;
        positive("turret_length", self.turret_length)?;
        positive("cannonball_radius", self.cannonball_radius)?;
        positive("cannonball_speed", self.cannonball_speed)?;
        unit_interval("player_aim_speed", self.player_aim_speed)?;
        unit_interval("enemy_aim_speed", self.enemy_aim_speed)?;

        if self.fps == 0 {
            return Err(TuningError::Invalid {
                field: "fps",
                reason: "must be at least 1",
            });
        }
        if self.max_health == 0 {
            return Err(TuningError::Invalid {
                field: "max_health",
                reason: "must be at least 1",
            });
        }
        if self.cannonball_lifetime <= 0 {
            return Err(TuningError::Invalid {
                field: "cannonball_lifetime",
                reason: "must be at least 1 frame",
            });
        }
        // Generated levels sample spawn and obstacle ranges inside these bounds
        if self.screen_width < MIN_SCREEN_WIDTH {
            return Err(TuningError::Invalid {
                field: "screen_width",
                reason: "playfield must be at least 200 wide",
            });
        }
        if self.screen_height < MIN_SCREEN_HEIGHT {
            return Err(TuningError::Invalid {
                field: "screen_height",
                reason: "playfield must be at least 300 tall",
            });
        }
        // Ships must fit on screen or spawn clamping has no valid range
        let largest = self.player_radius.max(self.enemy_radius);
        if 2.0 * largest >= self.screen_width.min(self.screen_height) {
            return Err(TuningError::Invalid {
                field: "player_radius",
                reason: "ships do not fit inside the playfield",
            });
        }
        Ok(())
    }

    /// Playfield size as a vector
    #[inline]
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Where the player starts every level
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.screen_width / 2.0).floor(),
            self.screen_height - self.player_spawn_offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_bounces": 4, "player_speed": 5.0 }"#).unwrap();
        assert_eq!(tuning.max_bounces, 4);
        assert_eq!(tuning.player_speed, 5.0);
        assert_eq!(tuning.max_health, MAX_HEALTH);
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_rejects_bad_aim_speed() {
        let err = Tuning::from_json(r#"{ "enemy_aim_speed": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "enemy_aim_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_tiny_playfield() {
        let err = Tuning::from_json(r#"{ "screen_width": 120.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "screen_width",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_short_playfield() {
        let err = Tuning::from_json(r#"{ "screen_height": 250.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "screen_height",
                ..
            }
        ));
    }

    #[test]
    fn test_player_spawn() {
        let tuning = Tuning::default();
        assert_eq!(tuning.player_spawn(), Vec2::new(400.0, 520.0));
    }
}
