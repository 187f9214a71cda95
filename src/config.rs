//! Configuration management for tabshell
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, DRAWER_DEFAULT_WIDTH, DRAWER_MAX_WIDTH, DRAWER_MIN_WIDTH};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tab to open on startup
    /// Options: "home", "explore", "favorites", "settings"
    pub start_tab: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Drawer panel width in columns
    pub drawer_width: u16,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Name shown in the header greeting
    pub greeting_name: String,
    /// Email shown below the greeting
    pub greeting_email: String,
    /// Icon theme for the header, tab bar, and drawer
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_tab: "home".to_string(),
            mouse_enabled: true,
            drawer_width: DRAWER_DEFAULT_WIDTH,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            greeting_name: "Caleb".to_string(),
            greeting_email: "hello@layo.design".to_string(),
            icon_theme: IconTheme::default(),
        }
    }
}

impl Config {
    /// Path of the configuration file inside the platform config directory
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("could not determine config directory")?;
        Ok(config_dir.join("tabshell").join("config.toml"))
    }

    /// Load the configuration, generating a default file on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            Self::generate_default_file(&path)?;
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Drawer width clamped to the documented bounds
    pub fn effective_drawer_width(&self) -> u16 {
        self.ui.drawer_width.clamp(DRAWER_MIN_WIDTH, DRAWER_MAX_WIDTH)
    }

    fn generate_default_file(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {}", parent.display()))?;
        }
        let contents =
            toml::to_string_pretty(&Config::default()).context("failed to serialize default config")?;
        fs::write(path, contents)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        log::info!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }
}
