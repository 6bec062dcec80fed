//! Owner of the active style configuration and the preset collections.

use std::path::PathBuf;

use anyhow::Result;

use super::catalog::built_in_presets;
use super::persistence::{load_user_presets, save_user_presets};
use crate::models::preset::StylePreset;
use crate::models::style::{StyleConfig, StyleUpdate};

/// Manages the active visual configuration plus the merged preset view.
///
/// Built-in presets live in an immutable catalog; user presets are the only
/// mutable collection and the only thing persisted. Consumers see both merged
/// (built-ins first) through [`StyleService::presets`].
pub struct StyleService {
    active: StyleConfig,
    built_ins: Vec<StylePreset>,
    user_presets: Vec<StylePreset>,
    storage_path: PathBuf,
}

impl StyleService {
    /// Create a service with no stored presets (nothing is read from disk).
    pub fn new(storage_path: PathBuf) -> Self {
        Self {
            active: StyleConfig::default(),
            built_ins: built_in_presets(),
            user_presets: Vec::new(),
            storage_path,
        }
    }

    /// Read the user-preset snapshot once. A missing or corrupt file means
    /// "no user presets"; corruption is logged, never surfaced.
    pub fn load(storage_path: PathBuf) -> Self {
        let user_presets = match load_user_presets(&storage_path) {
            Ok(presets) => presets,
            Err(err) => {
                log::warn!("ignoring unreadable preset snapshot: {err:#}");
                Vec::new()
            }
        };

        log::info!(
            "Loaded style service: {} built-in preset(s), {} user preset(s)",
            built_in_presets().len(),
            user_presets.len()
        );

        Self {
            active: StyleConfig::default(),
            built_ins: built_in_presets(),
            user_presets,
            storage_path,
        }
    }

    pub fn active(&self) -> &StyleConfig {
        &self.active
    }

    /// Replace a single field of the active configuration.
    pub fn update(&mut self, update: StyleUpdate) {
        self.active.apply(update);
    }

    /// Merged preset view: built-ins in catalog order, then user presets in
    /// storage order.
    pub fn presets(&self) -> impl Iterator<Item = &StylePreset> {
        self.built_ins.iter().chain(self.user_presets.iter())
    }

    pub fn user_presets(&self) -> &[StylePreset] {
        &self.user_presets
    }

    pub fn find_preset(&self, id: &str) -> Option<&StylePreset> {
        self.presets().find(|p| p.id == id)
    }

    pub fn is_built_in(&self, id: &str) -> bool {
        self.built_ins.iter().any(|p| p.id == id)
    }

    /// Replace the active configuration with the named preset's snapshot.
    /// Unknown ids are ignored. Returns whether a preset was applied.
    pub fn apply_preset(&mut self, id: &str) -> bool {
        match self.find_preset(id) {
            Some(preset) => {
                self.active = preset.styles.clone();
                true
            }
            None => false,
        }
    }

    /// Snapshot the active configuration as a new user preset and rewrite
    /// the stored user subset. A blank name is a silent no-op (`Ok(None)`).
    /// Returns the new preset's id.
    pub fn save_preset(&mut self, name: &str) -> Result<Option<String>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let mut preset = StylePreset::from_current(name, &self.active);
        // Millisecond ids can collide under rapid saves; bump until unique.
        while self.find_preset(&preset.id).is_some() {
            let bumped = preset.id.parse::<i64>().unwrap_or_default() + 1;
            preset.id = bumped.to_string();
        }

        let id = preset.id.clone();
        self.user_presets.push(preset);
        self.persist()?;
        Ok(Some(id))
    }

    /// Remove a user preset by id and rewrite the stored subset. Unknown ids
    /// and built-in ids are no-ops (built-ins are not in this collection).
    /// The active configuration is never touched. Returns whether anything
    /// was removed.
    pub fn delete_preset(&mut self, id: &str) -> Result<bool> {
        let before = self.user_presets.len();
        self.user_presets.retain(|p| p.id != id);
        if self.user_presets.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        save_user_presets(&self.storage_path, &self.user_presets)
    }
}

#[cfg(test)]
mod tests {
    use super::super::persistence::PRESETS_FILE;
    use super::*;
    use crate::models::style::{NumberStyle, StyleUpdate};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn service_in(dir: &tempfile::TempDir) -> StyleService {
        StyleService::load(dir.path().join(PRESETS_FILE))
    }

    #[test]
    fn test_initial_presets_are_the_catalog() {
        let dir = tempdir().unwrap();
        let service = service_in(&dir);
        assert_eq!(service.presets().count(), 10);
        assert!(service.user_presets().is_empty());
    }

    #[test]
    fn test_save_then_apply_round_trips_config() {
        let dir = tempdir().unwrap();
        let mut service = service_in(&dir);

        service.update(StyleUpdate::ParticleCount(47));
        service.update(StyleUpdate::NumberStyle(NumberStyle::Retro));
        let snapshot = service.active().clone();

        let id = service.save_preset("My Look").unwrap().unwrap();

        // Drift the active config, then restore via the preset
        service.update(StyleUpdate::ParticleCount(5));
        assert!(service.apply_preset(&id));
        assert_eq!(service.active(), &snapshot);
    }

    #[test]
    fn test_blank_name_is_silent_noop() {
        let dir = tempdir().unwrap();
        let mut service = service_in(&dir);

        assert_eq!(service.save_preset("").unwrap(), None);
        assert_eq!(service.save_preset("   ").unwrap(), None);
        assert!(service.user_presets().is_empty());
        assert!(!dir.path().join(PRESETS_FILE).exists());
    }

    #[test]
    fn test_apply_unknown_preset_is_noop() {
        let dir = tempdir().unwrap();
        let mut service = service_in(&dir);
        let before = service.active().clone();

        assert!(!service.apply_preset("no-such-preset"));
        assert_eq!(service.active(), &before);
    }

    #[test]
    fn test_apply_built_in_preset() {
        let dir = tempdir().unwrap();
        let mut service = service_in(&dir);

        assert!(service.apply_preset("minimal"));
        assert!(!service.active().show_particles);
        assert_eq!(service.active().color, "from-gray-500 to-gray-600");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let dir = tempdir().unwrap();
        let mut service = service_in(&dir);
        assert!(!service.delete_preset("missing").unwrap());
    }

    #[test]
    fn test_delete_built_in_id_is_noop() {
        let dir = tempdir().unwrap();
        let mut service = service_in(&dir);

        assert!(!service.delete_preset("cyberpunk").unwrap());
        assert!(service.find_preset("cyberpunk").is_some());
    }

    #[test]
    fn test_delete_applied_preset_keeps_active_config() {
        let dir = tempdir().unwrap();
        let mut service = service_in(&dir);

        service.update(StyleUpdate::ParticleCount(9));
        let id = service.save_preset("Doomed").unwrap().unwrap();
        assert!(service.apply_preset(&id));

        assert!(service.delete_preset(&id).unwrap());
        assert!(service.find_preset(&id).is_none());
        assert_eq!(service.active().particle_count, 9);
    }

    #[test]
    fn test_only_user_subset_is_persisted() {
        let dir = tempdir().unwrap();
        let mut service = service_in(&dir);

        service.save_preset("Stored").unwrap();

        let raw = std::fs::read_to_string(dir.path().join(PRESETS_FILE)).unwrap();
        assert!(raw.contains("Stored"));
        assert!(!raw.contains("Cyberpunk"));
    }

    #[test]
    fn test_rapid_saves_get_unique_ids() {
        let dir = tempdir().unwrap();
        let mut service = service_in(&dir);

        let a = service.save_preset("A").unwrap().unwrap();
        let b = service.save_preset("B").unwrap().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_catalog_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PRESETS_FILE);
        std::fs::write(&path, "{definitely not json").unwrap();

        let service = StyleService::load(path);
        assert_eq!(service.presets().count(), 10);
        assert!(service.user_presets().is_empty());
    }

    #[test]
    fn test_user_presets_survive_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PRESETS_FILE);

        let saved_id = {
            let mut service = StyleService::load(path.clone());
            service.update(StyleUpdate::ParticleCount(11));
            service.save_preset("Persisted").unwrap().unwrap()
        };

        let reloaded = StyleService::load(path);
        let preset = reloaded.find_preset(&saved_id).unwrap();
        assert_eq!(preset.name, "Persisted");
        assert_eq!(preset.styles.particle_count, 11);
        // Built-ins come first in the merged view
        let ids: Vec<&str> = reloaded.presets().map(|p| p.id.as_str()).collect();
        assert_eq!(ids[0], "cyberpunk");
        assert_eq!(*ids.last().unwrap(), saved_id.as_str());
    }
}
