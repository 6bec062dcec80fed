// Style preset model
// A named, reusable snapshot of the visual configuration

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::style::StyleConfig;

/// Named snapshot of a [`StyleConfig`].
///
/// Built-in presets use fixed human-readable ids (`"cyberpunk"`); user
/// presets get a millisecond-timestamp id at creation. Only user presets are
/// ever persisted; the built-in/user split lives in the collections, not in
/// a flag on this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePreset {
    pub id: String,
    pub name: String,
    pub styles: StyleConfig,
}

impl StylePreset {
    /// Snapshot the given configuration under a freshly generated id.
    pub fn from_current(name: impl Into<String>, styles: &StyleConfig) -> Self {
        Self {
            id: Utc::now().timestamp_millis().to_string(),
            name: name.into(),
            styles: styles.clone(),
        }
    }
}
