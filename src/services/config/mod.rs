//! Application configuration loaded from `config.toml`.
//!
//! A missing file means defaults; an unparsable file is logged and also
//! means defaults. Nothing here is required for the core to run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::style::PRESETS_FILE;
use crate::models::style::DEFAULT_GRADIENT;

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_gradient() -> String {
    DEFAULT_GRADIENT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Refresh period of the live countdown, in milliseconds.
    pub tick_interval_ms: u64,
    /// Overrides the preset snapshot location; defaults to the data dir.
    pub presets_path: Option<PathBuf>,
    /// Gradient token applied when an event has no color of its own.
    pub default_gradient: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            presets_path: None,
            default_gradient: default_gradient(),
        }
    }
}

impl AppConfig {
    /// Load from the per-user config dir, falling back to defaults.
    pub fn load() -> Self {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("no project config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load from an explicit path, falling back to defaults on any failure.
    pub fn load_from(path: &Path) -> Self {
        match read_config(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("ignoring unreadable config {}: {err:#}", path.display());
                Self::default()
            }
        }
    }

    /// Write the configuration as TOML to the given path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        let data = toml::to_string_pretty(self)
            .context("failed to serialize config")?;
        fs::write(path, data)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Resolved location of the user-preset snapshot.
    pub fn presets_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.presets_path {
            return Some(path.clone());
        }
        project_dirs().map(|dirs| dirs.data_dir().join(PRESETS_FILE))
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }
}

fn read_config(path: &Path) -> Result<Option<AppConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let config = toml::from_str(&data)
        .with_context(|| format!("failed to parse config from {}", path.display()))?;
    Ok(Some(config))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Ken24T", "CountdownStudio")
}

/// Location of `config.toml` inside the per-user config dir.
pub fn config_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}
