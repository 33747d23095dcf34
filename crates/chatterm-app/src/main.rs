mod app_state;
mod authorizer;
mod cli;
mod logging;

use std::process::ExitCode;
use std::sync::Arc;

use chatterm_backend::script::load_script;
use chatterm_backend::ScriptBackend;
use chatterm_common::ChattermError;
use chatterm_config::SettingsStore;
use chatterm_platform::CommandTable;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        app_state::restore_terminal();
        tracing::error!(%info, "panic");
        default_hook(info);
    }));
}

fn main() -> ExitCode {
    install_panic_hook();
    let args = cli::parse();

    let _log_guard = match logging::init(args.log_level.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("chatterm: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("=== chatterm launched ===");
    tracing::info!("chatterm v{}", env!("CARGO_PKG_VERSION"));

    let code = match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            eprintln!("chatterm: {e}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("=== chatterm exited ===");
    code
}

fn run(args: cli::Args) -> Result<(), ChattermError> {
    let table = CommandTable::default_table()?;
    tracing::info!("command table loaded ({} commands)", table.entries().len());

    let dirs = chatterm_platform::ensure_dirs()?;
    let settings = SettingsStore::load(&chatterm_platform::app_dir()?)?;
    tracing::info!(path = %settings.path().display(), "settings loaded");

    let replay = match args.replay {
        Some(path) => path,
        None => chatterm_platform::replay_file()?,
    };
    let (backend, updates) = ScriptBackend::new(load_script(&replay)?);

    let (columns, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let app = app_state::App::new(settings, table, columns, rows);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app_state::run(app, Arc::new(backend), updates, dirs))
}
