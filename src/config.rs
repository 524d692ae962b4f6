//! Configuration management for Cosmic Reader
//!
//! Handles loading, saving, and managing application configuration.
//! Configuration is stored as JSON in the user's config directory.

use crate::error::{ConfigError, ConfigResult};
use crate::state::SizingMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "com.cosmic.Reader";

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: u32 = 1000;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: u32 = 760;

/// Window width below which the toolbar switches to the compact layout
pub const DEFAULT_COMPACT_WIDTH: u32 = 720;

/// Maximum number of recent documents to remember
pub const MAX_RECENT_DOCUMENTS: usize = 20;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration
    pub ui: UiConfig,

    /// Zoom limits and defaults
    pub zoom: ZoomConfig,

    /// Recent documents configuration
    pub recent: RecentConfig,
}

impl Config {
    /// Load configuration from the config directory, or defaults if absent
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_file()?)
    }

    /// Save configuration to the config directory
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_file()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))
    }

    /// Reject values the viewer cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        let zoom = &self.zoom;
        if !(zoom.min_scale > 0.0 && zoom.min_scale <= 1.0 && zoom.max_scale >= 1.0) {
            return Err(ConfigError::InvalidValue {
                key: "zoom".to_string(),
                reason: format!(
                    "scale range {}..{} must contain 1.0 and be positive",
                    zoom.min_scale, zoom.max_scale
                ),
            });
        }
        if zoom.step <= 1.0 {
            return Err(ConfigError::InvalidValue {
                key: "zoom.step".to_string(),
                reason: "must be greater than 1.0".to_string(),
            });
        }
        Ok(())
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }

    fn config_file() -> ConfigResult<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Default window width
    pub window_width: u32,

    /// Default window height
    pub window_height: u32,

    /// Sidebar visible when a document opens
    pub sidebar_visible: bool,

    /// Sidebar width in pixels
    pub sidebar_width: u32,

    /// Width below which the compact toolbar layout is used
    pub compact_width: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            sidebar_visible: false,
            sidebar_width: 200,
            compact_width: DEFAULT_COMPACT_WIDTH,
        }
    }
}

/// Zoom configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Smallest scale the zoom control allows
    pub min_scale: f32,

    /// Largest scale the zoom control allows
    pub max_scale: f32,

    /// Factor applied per zoom in / zoom out step
    pub step: f32,

    /// Sizing mode used for newly opened documents
    pub default_sizing_mode: SizingMode,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.25,
            max_scale: 4.0,
            step: 1.2,
            default_sizing_mode: SizingMode::Automatic,
        }
    }
}

/// Recent documents configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentConfig {
    /// Maximum recent documents to track
    pub max_entries: usize,

    /// Hide entries whose files no longer exist
    pub hide_missing: bool,
}

impl Default for RecentConfig {
    fn default() -> Self {
        Self {
            max_entries: MAX_RECENT_DOCUMENTS,
            hide_missing: true,
        }
    }
}
