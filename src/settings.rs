//! Game settings
//!
//! Loaded from a JSON file by the host. Every field has a default, so an
//! empty object (or no file at all) yields the classic 800x600 game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Field, LevelLayout};

/// Runtime configuration for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play field ===
    /// Field width in pixels
    pub field_width: f32,
    /// Field height in pixels
    pub field_height: f32,

    // === Timing ===
    /// Largest dt integrated by a single tick (seconds)
    pub max_frame_dt: f32,

    // === Levels ===
    /// Brick grid shape
    pub layout: LevelLayout,
    /// Clearing this level wins the game
    pub final_level: u32,

    // === Visual Effects ===
    /// Particle bursts on hits and pickups
    pub particles: bool,

    /// RNG seed (host picks one when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            max_frame_dt: MAX_FRAME_DT,
            layout: LevelLayout::default(),
            final_level: FINAL_LEVEL,
            particles: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Play field described by these settings
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Check values that serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.field_width, self.field_height);
        if !w.is_finite() || !h.is_finite() || h <= 0.0 || w < PADDLE_MAX_WIDTH {
            return Err(ConfigError::InvalidField {
                width: w,
                height: h,
            });
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(ConfigError::InvalidFrameCap(self.max_frame_dt));
        }
        self.layout.check_fits(self.field())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a file if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("Using default settings");
            Ok(Self::default())
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
