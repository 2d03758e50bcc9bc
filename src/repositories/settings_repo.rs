use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::warn;

use crate::models::settings::{SearchSettings, SettingsPatch};

/// Namespace for the persisted preferences blob, shared with the frontend's
/// storage key.
pub const SETTINGS_STORAGE_KEY: &str = "restaurant-finder-settings";

/// Durable store for user search preferences. Saves every field except
/// `location`; loading overlays whatever was stored onto the defaults, so a
/// partial or corrupt blob can never leave a required field unset.
pub struct SettingsRepo {
    storage_dir: PathBuf,
}

impl SettingsRepo {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
        }
    }

    fn blob_path(&self) -> PathBuf {
        self.storage_dir.join(format!("{SETTINGS_STORAGE_KEY}.json"))
    }

    pub fn load(&self) -> SearchSettings {
        let defaults = SearchSettings::default();

        let raw = match fs::read_to_string(self.blob_path()) {
            Ok(raw) => raw,
            Err(_) => return defaults,
        };

        match serde_json::from_str::<SettingsPatch>(&raw) {
            Ok(stored) => defaults.merged(stored),
            Err(e) => {
                warn!("Failed to parse saved settings due to: {}, using defaults", e);
                defaults
            }
        }
    }

    pub fn save(&self, settings: &SearchSettings) -> anyhow::Result<()> {
        fs::create_dir_all(&self.storage_dir)
            .context("Error creating the settings storage directory")?;

        let blob = serde_json::to_string(&settings.to_stored())
            .context("Error serializing settings")?;
        fs::write(self.blob_path(), blob).context("Error writing the settings blob")
    }
}
