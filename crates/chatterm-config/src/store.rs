use std::path::{Path, PathBuf};

use chatterm_common::ConfigError;

use crate::json_loader::{load_or_create, SETTINGS_FILE_NAME};
use crate::json_writer::save_to_path;
use crate::schema::Settings;

/// In-memory settings bound to their file.
///
/// Every change made through [`SettingsStore::update`] is written back
/// immediately; updates that leave the value untouched do not touch disk.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load `settings.json` from `dir`, creating it on first run.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(SETTINGS_FILE_NAME);
        let settings = load_or_create(&path)?;
        Ok(Self { path, settings })
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `f` and persist if anything changed. Returns whether the
    /// settings changed.
    ///
    /// A failed write keeps the new in-memory value and is logged; the next
    /// successful change will persist it.
    pub fn update(&mut self, f: impl FnOnce(&mut Settings)) -> bool {
        let before = self.settings.clone();
        f(&mut self.settings);
        if self.settings == before {
            return false;
        }
        if let Err(e) = save_to_path(&self.settings, &self.path) {
            tracing::warn!(error = %e, "failed to persist settings");
        }
        true
    }
}
