//! Disk snapshot of user-defined presets.
//!
//! A single JSON file holds the whole user subset and is rewritten wholesale
//! on every save/delete. Built-in presets never appear here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{self, Error as SerdeError};

use crate::models::preset::StylePreset;

/// File name of the preset snapshot inside the data directory.
pub const PRESETS_FILE: &str = "timer_presets.json";

pub fn load_user_presets(path: &Path) -> Result<Vec<StylePreset>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read presets from {}", path.display()))?;
    let presets = serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    Ok(presets)
}

pub fn save_user_presets(path: &Path, presets: &[StylePreset]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(presets)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write presets to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize presets from {}",
        path.display()
    ))
}
