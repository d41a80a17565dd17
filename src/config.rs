//! Configuration management for the application.
//!
//! This module handles loading, validating and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_BINARY_NAME, CONFIG_DIR_ENV, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};

/// Transform defaults used when the command line gives no commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransformConfig {
    /// Fallback command string (e.g., "H,V,3")
    pub commands: String,
    /// Abort on unrecognized command tokens instead of skipping them
    pub strict: bool,
}

/// Stream encoding settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// Bytes read per chunk
    pub chunk_size: usize,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$KEYMORPH_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/keymorph/config.toml`
/// - macOS: `~/Library/Application Support/keymorph/config.toml`
/// - Windows: `%APPDATA%\keymorph\config.toml`
///
/// # Validation
///
/// - `encode.chunk_size` must be between 1 and 1 MiB
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Transform defaults
    pub transform: TransformConfig,
    /// Encoding settings
    pub encode: EncodeConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honoring `KEYMORPH_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Reads configuration from an explicit file.
    ///
    /// Values are not validated here; call [`Config::validate`] before use.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to `path` using temp file + rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

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
    pub fn validate(&self) -> Result<()> {
        validate_chunk_size(self.encode.chunk_size)
    }
}

/// Checks that a chunk size is usable for streaming.
pub fn validate_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        anyhow::bail!("Chunk size must be at least 1 byte");
    }
    if chunk_size > MAX_CHUNK_SIZE {
        anyhow::bail!(
            "Chunk size {} exceeds the maximum of {} bytes",
            chunk_size,
            MAX_CHUNK_SIZE
        );
    }
    Ok(())
}
