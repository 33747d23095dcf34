use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("settings file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("settings parse error: {0}")]
    ParseError(String),

    #[error("settings write error: {0}")]
    WriteError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("invalid command pattern '{pattern}': {reason}")]
    InvalidCommandPattern { pattern: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend start failed: {0}")]
    StartFailed(String),

    #[error("backend request failed: {0}")]
    RequestFailed(String),

    #[error("backend script error: {0}")]
    ScriptError(String),

    #[error("backend closed")]
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum ChattermError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("authorization error: {0}")]
    Authorization(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/settings.json"));
        assert_eq!(err.to_string(), "settings file not found: /tmp/settings.json");

        let err = ConfigError::ParseError("expected value at line 1".into());
        assert_eq!(
            err.to_string(),
            "settings parse error: expected value at line 1"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::InvalidCommandPattern {
            pattern: "gt".into(),
            reason: "missing placeholder".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid command pattern 'gt': missing placeholder"
        );

        let err = PlatformError::PathError("no data dir".into());
        assert_eq!(err.to_string(), "path error: no data dir");
    }

    #[test]
    fn backend_error_display() {
        assert_eq!(BackendError::Closed.to_string(), "backend closed");
        let err = BackendError::RequestFailed("chat not found".into());
        assert_eq!(err.to_string(), "backend request failed: chat not found");
        let err = BackendError::StartFailed("already started".into());
        assert_eq!(err.to_string(), "backend start failed: already started");
    }

    #[test]
    fn chatterm_error_from_config() {
        let err: ChattermError = ConfigError::ParseError("bad json".into()).into();
        assert!(matches!(err, ChattermError::Config(_)));
        assert!(err.to_string().contains("bad json"));
    }

    #[test]
    fn chatterm_error_from_backend() {
        let err: ChattermError = BackendError::StartFailed("no script".into()).into();
        assert!(matches!(err, ChattermError::Backend(_)));
        assert!(err.to_string().contains("no script"));
    }

    #[test]
    fn chatterm_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ChattermError = io_err.into();
        assert!(matches!(err, ChattermError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn chatterm_error_other_variants() {
        let err = ChattermError::Authorization("closed during login".into());
        assert_eq!(err.to_string(), "authorization error: closed during login");

        let err = ChattermError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
