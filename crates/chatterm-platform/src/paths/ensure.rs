use std::fs;
use std::path::Path;

use chatterm_common::PlatformError;

use super::resolve::{app_dir, StorageDirs};

/// Creates the app directory tree if it does not already exist.
///
/// Creates: the app root, `database/`, `files/`, `logs/` and `logs/backend/`.
pub fn ensure_dirs() -> Result<StorageDirs, PlatformError> {
    ensure_dirs_under(&app_dir()?)
}

/// Same as [`ensure_dirs`] with an explicit root.
pub fn ensure_dirs_under(root: &Path) -> Result<StorageDirs, PlatformError> {
    let dirs = StorageDirs::under(root);
    for dir in [&dirs.database, &dirs.files, &dirs.logs] {
        fs::create_dir_all(dir).map_err(|e| {
            PlatformError::PathError(format!("failed to create {}: {e}", dir.display()))
        })?;
    }
    tracing::debug!(root = %root.display(), "storage directories ready");
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_full_tree() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("chatterm");

        let dirs = ensure_dirs_under(&root).unwrap();

        assert!(dirs.database.is_dir());
        assert!(dirs.files.is_dir());
        assert!(dirs.logs.is_dir());
        assert!(root.join("logs").is_dir());
    }

    #[test]
    fn is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let first = ensure_dirs_under(tmp.path()).unwrap();
        let second = ensure_dirs_under(tmp.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fails_when_root_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("occupied");
        std::fs::write(&file, b"").unwrap();

        let result = ensure_dirs_under(&file);
        assert!(matches!(result, Err(PlatformError::PathError(_))));
    }
}
