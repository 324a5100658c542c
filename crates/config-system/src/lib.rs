//! Configuration system for the Overmap overlay
//! Manages user settings, the icon policy, and validation

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod icons;
pub mod validation;

pub use icons::{IconPolicy, IconSetting};

/// Errors raised while loading, saving, or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read configuration from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write configuration to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// User-facing overlay settings, consumed read-only by the render pipeline.
///
/// Unknown fields in a stored file are ignored and missing fields fall back
/// to defaults, so config files survive version upgrades.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Show tooltips for markers that carry no special behavior.
    pub show_misc_tooltips: bool,
    /// Base icon scale, applied before any zoom coupling.
    pub icon_scale: f32,
    /// Linear zoom adds `zoom_speed` per wheel notch; multiplicative
    /// compounds `1 + zoom_speed` per notch.
    pub use_linear_zoom: bool,
    pub zoom_speed: f32,
    /// When set, wheel input is ignored entirely.
    pub zoom_locked: bool,
    /// Scale marker icons together with the map zoom.
    pub scale_with_zoom: bool,
    /// Keep the viewport centered on the player each frame.
    pub follow_player: bool,
    /// Keep the overlay open even when the game map agent is inactive.
    pub keep_open: bool,
    pub show_coordinate_bar: bool,
    /// Window alpha while faded, 0.05..=1.0.
    pub fade_percent: f32,
    /// Draw world-space radius circles for area markers.
    pub show_radius: bool,
    /// Append the gil cost to teleport tooltips.
    pub show_teleport_cost: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            show_misc_tooltips: true,
            icon_scale: 1.0,
            use_linear_zoom: false,
            zoom_speed: 0.15,
            zoom_locked: false,
            scale_with_zoom: false,
            follow_player: false,
            keep_open: false,
            show_coordinate_bar: true,
            fade_percent: 1.0,
            show_radius: true,
            show_teleport_cost: true,
        }
    }
}

impl OverlayConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: OverlayConfig = serde_json::from_str(json)?;
        validation::validate(&config)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
