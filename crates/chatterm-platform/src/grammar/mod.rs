//! Vim-style multi-key command grammar.
//!
//! Keystrokes accumulate in a pending buffer that is matched against a
//! fixed [`CommandTable`]. A command fires as soon as the buffer equals one
//! of its patterns; a buffer no pattern can complete is dropped.

mod listener;
mod pattern;
mod table;

pub use listener::{CommandListener, KeyOutcome, KeyStroke};
pub use pattern::{CommandPattern, PARAMETER_PLACEHOLDER};
pub use table::{CommandEntry, CommandTable, FOLDER_PARAMETERS, LAST_FOLDER_PARAMETER};

#[cfg(test)]
mod tests;
