use crate::error::{Result, StoreError};
use crate::store::FsProjectStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Worldbuilding settings loaded from a project's `settings/` directory.
///
/// Each field maps to one JSON file; absent files load as `None`. The
/// schemas are author-defined, so values stay untyped JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub characters: Option<Value>,
    pub worldview: Option<Value>,
    pub power_system: Option<Value>,
    pub foreshadows: Option<Value>,
}

const SETTINGS_FILES: [(&str, fn(&mut ProjectSettings) -> &mut Option<Value>); 4] = [
    ("characters.json", |s| &mut s.characters),
    ("worldview.json", |s| &mut s.worldview),
    ("power-system.json", |s| &mut s.power_system),
    ("foreshadows.json", |s| &mut s.foreshadows),
];

fn load_json(path: &Path) -> Result<Option<Value>> {
    if !path.is_file() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    let value = serde_json::from_str(&raw).map_err(|source| StoreError::MalformedSettings {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(value))
}

impl FsProjectStore {
    /// Load all known settings files. Missing files are skipped; a present
    /// but malformed file is surfaced as an error, not retried.
    pub fn load_settings(&self) -> Result<ProjectSettings> {
        let dir = self.settings_dir();
        let mut settings = ProjectSettings::default();
        for (file, slot) in SETTINGS_FILES {
            *slot(&mut settings) = load_json(&dir.join(file))?;
        }
        Ok(settings)
    }

    /// Write one settings file as pretty-printed JSON, creating the
    /// settings directory on demand.
    pub fn save_settings(&self, file_name: &str, value: &Value) -> Result<()> {
        let dir = self.settings_dir();
        fs::create_dir_all(&dir)?;
        let path = dir.join(file_name);
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        log::info!("Wrote settings file {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn absent_settings_load_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FsProjectStore::new(dir.path());
        let settings = store.load_settings().unwrap();
        assert_eq!(settings, ProjectSettings::default());
    }

    #[test]
    fn present_files_load_into_their_slots() {
        let dir = TempDir::new().unwrap();
        let settings_dir = dir.path().join("settings");
        fs::create_dir_all(&settings_dir).unwrap();
        fs::write(
            settings_dir.join("characters.json"),
            r#"{"hero": "Lin Yan"}"#,
        )
        .unwrap();
        fs::write(settings_dir.join("power-system.json"), r#"["qi", "sword"]"#).unwrap();

        let store = FsProjectStore::new(dir.path());
        let settings = store.load_settings().unwrap();

        assert_eq!(settings.characters, Some(json!({"hero": "Lin Yan"})));
        assert_eq!(settings.power_system, Some(json!(["qi", "sword"])));
        assert!(settings.worldview.is_none());
        assert!(settings.foreshadows.is_none());
    }

    #[test]
    fn malformed_json_is_a_typed_error() {
        let dir = TempDir::new().unwrap();
        let settings_dir = dir.path().join("settings");
        fs::create_dir_all(&settings_dir).unwrap();
        fs::write(settings_dir.join("worldview.json"), "{not json").unwrap();

        let store = FsProjectStore::new(dir.path());
        let err = store.load_settings().unwrap_err();
        assert!(matches!(err, StoreError::MalformedSettings { .. }));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FsProjectStore::new(dir.path());
        let value = json!({"thread": "the sealed door", "planted_in": 3});

        store.save_settings("foreshadows.json", &value).unwrap();
        let settings = store.load_settings().unwrap();
        assert_eq!(settings.foreshadows, Some(value));
    }
}
