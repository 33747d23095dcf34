//! Write settings to JSON on disk.
//!
//! Writes are atomic (write to `.tmp`, then rename) so a crash mid-write
//! never leaves a truncated settings file behind.

use std::path::Path;

use chatterm_common::ConfigError;

use crate::schema::Settings;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Write settings as indented JSON to `path`, creating parent directories.
pub fn save_to_path(settings: &Settings, path: &Path) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| ConfigError::WriteError(format!("failed to serialize settings: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create settings directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json).map_err(|e| {
        ConfigError::WriteError(format!(
            "failed to write settings to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &json).map_err(|e2| {
            ConfigError::WriteError(format!(
                "failed to write settings to {}: {e2}",
                path.display()
            ))
        })?;
    }

    tracing::debug!(path = %path.display(), "Settings saved to disk");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
