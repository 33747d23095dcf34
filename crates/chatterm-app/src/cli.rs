use std::path::PathBuf;

use clap::Parser;

/// chatterm: a keyboard-driven messenger client for the terminal.
#[derive(Parser, Debug)]
#[command(name = "chatterm", version, about)]
pub struct Args {
    /// Log filter directive override (e.g. `chatterm=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Update script for the script backend. Defaults to `replay.json`
    /// in the app data directory.
    #[arg(long)]
    pub replay: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
