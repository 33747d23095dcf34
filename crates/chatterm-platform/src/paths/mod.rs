mod ensure;
mod resolve;

pub use ensure::{ensure_dirs, ensure_dirs_under};
pub use resolve::{
    app_dir, backend_log_dir, database_dir, files_dir, log_dir, replay_file, StorageDirs,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dir_ends_with_chatterm() {
        let path = app_dir().unwrap();
        assert!(
            path.ends_with("chatterm"),
            "app_dir should end with 'chatterm', got: {path:?}"
        );
    }

    #[test]
    fn storage_dirs_are_inside_app_dir() {
        let app = app_dir().unwrap();
        for dir in [database_dir().unwrap(), files_dir().unwrap(), log_dir().unwrap()] {
            assert!(dir.starts_with(&app), "{dir:?} should be inside {app:?}");
        }
    }

    #[test]
    fn backend_log_dir_is_inside_log_dir() {
        let logs = log_dir().unwrap();
        let backend = backend_log_dir().unwrap();
        assert!(backend.starts_with(&logs));
        assert_eq!(backend.file_name().unwrap().to_str().unwrap(), "backend");
    }

    #[test]
    fn replay_file_has_correct_name() {
        let path = replay_file().unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "replay.json");
        assert!(path.parent().unwrap().ends_with("chatterm"));
    }
}
