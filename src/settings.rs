use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::models::{PitchType, TargetZone};

/// The context a fresh recording session starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingDefaults {
    pub pitch_type: String,
    pub target: String,
}

impl Default for RecordingDefaults {
    fn default() -> Self {
        Self {
            pitch_type: PitchType::Fastball.as_str().into(),
            target: TargetZone::Strike.as_str().into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct UserSettings {
    recording: RecordingDefaults,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    /// Missing or corrupt settings files degrade to defaults; a settings
    /// file must never block startup.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn recording(&self) -> RecordingDefaults {
        self.data.read().unwrap().recording.clone()
    }

    pub fn update_recording(&self, defaults: RecordingDefaults) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            guard.recording = defaults;
            self.persist(&guard)?;
        }
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();
        let defaults = store.recording();
        assert_eq!(defaults.pitch_type, "Fastball");
        assert_eq!(defaults.target, "Strike");
    }

    #[test]
    fn update_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        store
            .update_recording(RecordingDefaults {
                pitch_type: "Slider".into(),
                target: "Below".into(),
            })
            .unwrap();

        let reopened = SettingsStore::new(path).unwrap();
        assert_eq!(reopened.recording().pitch_type, "Slider");
        assert_eq!(reopened.recording().target, "Below");
    }

    #[test]
    fn corrupt_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.recording().pitch_type, "Fastball");
    }
}
