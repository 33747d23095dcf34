//! Normalized client state: folders, chats, messages and users, plus the
//! per-folder selection and scroll window.
//!
//! Every chat is owned once by the [`Model`]; folders refer to chats by id,
//! so a chat listed in several folders is the same instance everywhere.

pub mod chat;
pub mod folder;
pub mod store;
pub mod user;
pub mod viewport;

pub use chat::{Chat, Message};
pub use folder::Folder;
pub use store::{ListRef, Model, PositionChange, ALL_CHATS_TITLE};
pub use user::User;
pub use viewport::Viewport;
