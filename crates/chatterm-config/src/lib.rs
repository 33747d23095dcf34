//! Persistent client settings.
//!
//! Settings live in a single pretty-printed JSON file under the app data
//! directory. The file is created with defaults on first run and rewritten
//! whenever a setting actually changes.

pub mod json_loader;
pub mod json_writer;
pub mod schema;
pub mod store;

pub use json_loader::{load_from_path, load_or_create, SETTINGS_FILE_NAME};
pub use json_writer::save_to_path;
pub use schema::Settings;
pub use store::SettingsStore;
