pub mod client;
pub mod content;
pub mod protocol;
pub mod sanitize;
pub mod script;

pub use client::{Backend, MessagesPage, PageMessage, LOAD_CHATS_LIMIT};
pub use content::ActionDisplay;
pub use protocol::{
    AuthorizationState, ChatAction, ChatInfo, ChatList, ChatPosition, FolderInfo, MessageContent,
    MessageInfo, MessageSender, NotificationScope, NotificationSettings, Update, UpdateKind,
    UserInfo, UserStatus,
};
pub use sanitize::sanitize;
pub use script::{LoginScript, Script, ScriptBackend};
