//! JSON snapshot persistence for the tag registry.
//!
//! The save/restore hook is optional and driver-invoked: a snapshot captures
//! the registry's tag pools and selection state, nothing else — broadcast
//! presentation state is deliberately excluded.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::registry::TagRegistry;

/// A serializable capture of the registry at one moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// The captured tag pools, selection included.
    pub registry: TagRegistry,
}

impl RegistrySnapshot {
    /// Capture the current registry state.
    pub fn capture(registry: &TagRegistry) -> Self {
        Self {
            saved_at: Utc::now(),
            registry: registry.clone(),
        }
    }

    /// Consume the snapshot, yielding the captured registry.
    pub fn into_registry(self) -> TagRegistry {
        self.registry
    }

    /// Write the snapshot to a JSON file.
    pub fn save_to_path(&self, path: &Path) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a snapshot back from a JSON file.
    pub fn load_from_path(path: &Path) -> EngineResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use mw_core::{Persistence, TagState};
    use tempfile::TempDir;

    fn populated_registry() -> TagRegistry {
        let mut reg = TagRegistry::new();
        reg.add_story_tag("Wired In", Persistence::Ongoing).unwrap();
        reg.add_story_tag("Fleeting Edge", Persistence::Temporary)
            .unwrap();
        reg.toggle_select("Wired In").unwrap();
        reg
    }

    #[test]
    fn capture_and_restore() {
        let reg = populated_registry();
        let snap = RegistrySnapshot::capture(&reg);
        let restored = snap.into_registry();
        assert_eq!(restored.story_count(), 2);
        assert_eq!(restored.selected_names(), ["Wired In"]);
    }

    #[test]
    fn file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let reg = populated_registry();
        RegistrySnapshot::capture(&reg).save_to_path(&path).unwrap();

        let restored = RegistrySnapshot::load_from_path(&path)
            .unwrap()
            .into_registry();
        assert_eq!(restored.story_count(), 2);
        assert_eq!(
            restored.find("Wired In").unwrap().state,
            TagState::Selected
        );
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = RegistrySnapshot::load_from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn load_malformed_file_is_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = RegistrySnapshot::load_from_path(&path).unwrap_err();
        assert!(matches!(err, EngineError::Format(_)));
    }
}
