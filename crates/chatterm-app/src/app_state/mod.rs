//! Application state and the cooperative event loop.
//!
//! [`App`] owns the model and is the only writer to it. Backend updates,
//! recognized commands and effect results all funnel through its `apply_*`
//! methods; each returns whether the visible frame may have changed.

mod command_handlers;
mod core;
mod effects;
mod render;
mod runtime;
mod terminal;
mod update_handlers;
mod update_log;

pub use self::core::App;
pub use runtime::run;
pub use terminal::restore as restore_terminal;
