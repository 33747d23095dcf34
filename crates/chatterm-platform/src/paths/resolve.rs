use std::path::{Path, PathBuf};

use chatterm_common::PlatformError;

pub(super) const APP_NAME: &str = "chatterm";

/// Returns the per-user application data root.
///
/// - macOS: `~/Library/Application Support/chatterm`
/// - Linux: `$XDG_DATA_HOME/chatterm` (defaults to `~/.local/share/chatterm`)
/// - Windows: `%LOCALAPPDATA%\chatterm`
pub fn app_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_local_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Backend database directory.
pub fn database_dir() -> Result<PathBuf, PlatformError> {
    Ok(app_dir()?.join("database"))
}

/// Backend downloaded-files directory.
pub fn files_dir() -> Result<PathBuf, PlatformError> {
    Ok(app_dir()?.join("files"))
}

pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(app_dir()?.join("logs"))
}

pub fn backend_log_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("backend"))
}

/// Default update script for the script backend.
pub fn replay_file() -> Result<PathBuf, PlatformError> {
    Ok(app_dir()?.join("replay.json"))
}

/// Directories handed to the backend on start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageDirs {
    pub database: PathBuf,
    pub files: PathBuf,
    pub logs: PathBuf,
}

impl StorageDirs {
    /// Resolve the directories under the platform app data root.
    pub fn resolve() -> Result<Self, PlatformError> {
        Ok(Self::under(&app_dir()?))
    }

    /// Lay the directories out below an explicit root.
    pub fn under(root: &Path) -> Self {
        Self {
            database: root.join("database"),
            files: root.join("files"),
            logs: root.join("logs").join("backend"),
        }
    }
}
