//! A backend that replays a recorded update script.
//!
//! Used when no network backend is configured and in tests: the script
//! lists the updates to push at start, updates to release on `load_chats`,
//! per-chat history served by `load_messages`, and optionally the
//! credentials of a scripted login.

mod backend;
mod types;

pub use backend::ScriptBackend;
pub use types::{load_script, LoginScript, Script};
