//! Configuration for the tinct CLI.
//!
//! Lives at `~/.config/tinct/config.toml`. Holds gradient defaults and a
//! table of named styles that `tinct style --name` can reference. A missing
//! file is not an error - defaults apply.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::gradient::ColorTarget;
use crate::style::Style;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Named styles referenced by `tinct style --name <name>`.
    #[serde(default)]
    pub styles: HashMap<String, Style>,
}

/// Default parameters for gradient commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Step count used when `--steps` is not given
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Side of the style gradient colors land on (`fore` or `back`)
    #[serde(default)]
    pub target: ColorTarget,
}

pub fn default_steps() -> usize {
    24
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            target: ColorTarget::default(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/tinct/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the config directory path (~/.config/tinct)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("tinct"))
    }

    /// Load configuration from the default path, or return defaults if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        debug!(styles = config.styles.len(), "loaded config");
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Look up a named style.
    pub fn style(&self, name: &str) -> Option<Style> {
        self.styles.get(name).copied()
    }
}
