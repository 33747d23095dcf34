pub mod crossterm_keys;
pub mod grammar;
pub mod paths;

pub use crossterm_keys::key_stroke;
pub use grammar::{CommandEntry, CommandListener, CommandPattern, CommandTable, KeyOutcome, KeyStroke};
pub use paths::{app_dir, ensure_dirs, log_dir, replay_file, StorageDirs};
