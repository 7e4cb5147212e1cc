//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub settings: SettingsConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Mirror log events to stderr.
    #[serde(default = "default_true")]
    pub console: bool,

    /// Directory for daily-rolling log files. No file output when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            console: true,
            file_dir: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Scroll command configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Pixels moved by the scroll-down command.
    #[serde(default = "default_down_px")]
    pub down_px: f64,

    /// Pixels moved by the scroll-up command.
    #[serde(default = "default_up_px")]
    pub up_px: f64,

    #[serde(default = "default_true")]
    pub smooth: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            down_px: default_down_px(),
            up_px: default_up_px(),
            smooth: true,
        }
    }
}

fn default_down_px() -> f64 {
    150.0
}

fn default_up_px() -> f64 {
    200.0
}

/// Location of the persisted per-site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default = "default_settings_path")]
    pub path: PathBuf,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: default_settings_path(),
        }
    }
}

fn default_settings_path() -> PathBuf {
    navel_dir().join("settings.json")
}

/// The `~/.navel` directory.
pub fn navel_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".navel"))
        .unwrap_or_else(|| PathBuf::from(".navel"))
}
