pub mod commands;
pub mod errors;
pub mod ids;
pub mod router;

pub use commands::{Command, CommandKind};
pub use errors::{BackendError, ChattermError, ConfigError, PlatformError};
pub use ids::{ChatId, FolderId, MessageId, UserId, ALL_CHATS_FOLDER_ID};
pub use router::{Routable, Routed, Router};

pub type Result<T> = std::result::Result<T, ChattermError>;
