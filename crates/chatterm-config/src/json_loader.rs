//! Settings file loading and first-run creation.

use std::path::Path;

use chatterm_common::ConfigError;
use tracing::info;

use crate::json_writer::save_to_path;
use crate::schema::Settings;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Load settings from a specific JSON file.
///
/// Missing fields take their defaults. A malformed file is an error.
pub fn load_from_path(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let settings: Settings = serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}")))?;

    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings from `path`, writing a default file first if none exists.
pub fn load_or_create(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        info!("no settings found at {}, creating default", path.display());
        let settings = Settings::default();
        save_to_path(&settings, path)?;
        return Ok(settings);
    }

    load_from_path(path)
}
