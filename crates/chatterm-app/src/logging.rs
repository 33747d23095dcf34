//! File logging. The terminal belongs to the UI, so nothing is written to
//! stdout or stderr once the app is running.

use chatterm_common::ChattermError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "app.log";
const DEFAULT_DIRECTIVE: &str = "chatterm=info";

/// Install the global subscriber. The returned guard flushes the writer
/// when dropped and must live until exit.
pub fn init(directive: Option<&str>) -> Result<WorkerGuard, ChattermError> {
    let log_dir = chatterm_platform::log_dir()?;
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(directive)?)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| ChattermError::Other(format!("failed to install logger: {e}")))?;

    Ok(guard)
}

fn filter(directive: Option<&str>) -> Result<EnvFilter, ChattermError> {
    let directive = directive
        .unwrap_or(DEFAULT_DIRECTIVE)
        .parse()
        .map_err(|e| ChattermError::Other(format!("invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}
