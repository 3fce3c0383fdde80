//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_DATA_DIR;
use crate::layout::CanvasLayout;
use crate::models::RgbColor;

/// Virtual canvas dimensions and hexagon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Hexagon edge length in pixels
    pub side_len: i32,
    /// Canvas width in pixels, tool panel included
    pub width: i32,
    /// Canvas height in pixels
    pub height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            side_len: 20,
            width: 1560,
            height: 1000,
        }
    }
}

/// Color settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Color of hexes that were never painted
    pub grid_default: RgbColor,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            grid_default: RgbColor::BLUE,
        }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving `hexgrid_NNN.png` files
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/HexPaint/config.toml`
/// - macOS: `~/Library/Application Support/HexPaint/config.toml`
/// - Windows: `%APPDATA%\HexPaint\config.toml`
///
/// # Validation
///
/// - canvas dimensions must describe a layout with a grid radius of at least 1
/// - `output_dir` must not be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas and hexagon size
    pub canvas: CanvasConfig,
    /// Color settings
    pub colors: ColorsConfig,
    /// Export settings
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/HexPaint/`
    /// - macOS: `~/Library/Application Support/HexPaint/`
    /// - Windows: `%APPDATA%\HexPaint\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the path of the log file used while the terminal UI is running.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("hexpaint.log"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - the canvas yields a usable layout (see [`CanvasLayout::new`])
    /// - `output_dir` is set
    pub fn validate(&self) -> Result<()> {
        self.canvas_layout()?;

        if self.export.output_dir.as_os_str().is_empty() {
            anyhow::bail!("Export output_dir must not be empty");
        }

        Ok(())
    }

    /// Derives the canvas layout from the canvas section.
    pub fn canvas_layout(&self) -> Result<CanvasLayout> {
        let CanvasConfig {
            side_len,
            width,
            height,
        } = self.canvas;
        CanvasLayout::new(side_len, width, height)
    }
}
