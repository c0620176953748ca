//! Presentation preferences
//!
//! Nothing here affects the simulation; these only change what gets drawn.
//! Unlike [`crate::Tuning`], a bad settings file is never fatal.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player-facing display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Controls hint in the top-right corner
    pub show_controls: bool,
    /// Reticle at the end of the player's aim line
    pub show_reticle: bool,
    /// Segmented health bar above the player
    pub show_health_bars: bool,

    // === Effects ===
    /// Blink ships white when they take a hit
    pub hit_flash: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses flashing)
    pub reduced_motion: bool,
    /// High contrast palette
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_controls: true,
            show_reticle: true,
            show_health_bars: true,

            hit_flash: true,

            reduced_motion: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// Effective hit flash (respects reduced_motion)
    pub fn effective_hit_flash(&self) -> bool {
        self.hit_flash && !self.reduced_motion
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Ignoring malformed settings: {}", err);
                Self::default()
            }
        }
    }

    /// Load settings from disk, or defaults if the file is missing or unreadable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(err) => {
                log::info!("Using default settings ({}: {})", path.display(), err);
                Self::default()
            }
        }
    }
}
