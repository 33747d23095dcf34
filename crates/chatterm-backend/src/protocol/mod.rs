//! Update stream types.
//!
//! Every value the backend pushes is one variant of [`Update`], a closed
//! tagged union keyed by `@type`. Types the client never acts on are still
//! listed so they can be told apart from genuinely unknown ones.

mod types;

pub use types::*;

use chatterm_common::{ChatId, Routable, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub enum Update {
    AuthorizationState {
        authorization_state: AuthorizationState,
    },
    NewChat {
        chat: ChatInfo,
    },
    ChatPosition {
        chat_id: ChatId,
        position: ChatPosition,
    },
    ChatLastMessage {
        chat_id: ChatId,
        #[serde(default)]
        last_message: Option<MessageInfo>,
        #[serde(default)]
        positions: Vec<ChatPosition>,
    },
    ChatReadInbox {
        chat_id: ChatId,
        unread_count: u32,
    },
    ChatNotificationSettings {
        chat_id: ChatId,
        notification_settings: NotificationSettings,
    },
    ScopeNotificationSettings {
        scope: NotificationScope,
        notification_settings: NotificationSettings,
    },
    ChatFolders {
        chat_folders: Vec<FolderInfo>,
    },
    ChatAction {
        chat_id: ChatId,
        sender_id: MessageSender,
        action: ChatAction,
    },
    UserStatus {
        user_id: UserId,
        status: UserStatus,
    },
    User {
        user: UserInfo,
    },

    // -- Known, deliberately ignored --
    NewMessage,
    DeleteMessages,
    MessageContent,
    MessageEdited,
    ConnectionState,
    #[serde(rename = "option")]
    OptionValue,
    Supergroup,
    BasicGroup,
    UserFullInfo,
    HavePendingNotifications,

    #[serde(other)]
    Unknown,
}

/// Payload-free discriminant of [`Update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    AuthorizationState,
    NewChat,
    ChatPosition,
    ChatLastMessage,
    ChatReadInbox,
    ChatNotificationSettings,
    ScopeNotificationSettings,
    ChatFolders,
    ChatAction,
    UserStatus,
    User,
    NewMessage,
    DeleteMessages,
    MessageContent,
    MessageEdited,
    ConnectionState,
    OptionValue,
    Supergroup,
    BasicGroup,
    UserFullInfo,
    HavePendingNotifications,
    Unknown,
}

impl UpdateKind {
    /// Update kinds the client receives but never acts on.
    pub const IGNORED: [UpdateKind; 10] = [
        UpdateKind::NewMessage,
        UpdateKind::DeleteMessages,
        UpdateKind::MessageContent,
        UpdateKind::MessageEdited,
        UpdateKind::ConnectionState,
        UpdateKind::OptionValue,
        UpdateKind::Supergroup,
        UpdateKind::BasicGroup,
        UpdateKind::UserFullInfo,
        UpdateKind::HavePendingNotifications,
    ];

    pub fn is_ignored(self) -> bool {
        Self::IGNORED.contains(&self)
    }
}

impl Update {
    pub fn kind(&self) -> UpdateKind {
        match self {
            Update::AuthorizationState { .. } => UpdateKind::AuthorizationState,
            Update::NewChat { .. } => UpdateKind::NewChat,
            Update::ChatPosition { .. } => UpdateKind::ChatPosition,
            Update::ChatLastMessage { .. } => UpdateKind::ChatLastMessage,
            Update::ChatReadInbox { .. } => UpdateKind::ChatReadInbox,
            Update::ChatNotificationSettings { .. } => UpdateKind::ChatNotificationSettings,
            Update::ScopeNotificationSettings { .. } => UpdateKind::ScopeNotificationSettings,
            Update::ChatFolders { .. } => UpdateKind::ChatFolders,
            Update::ChatAction { .. } => UpdateKind::ChatAction,
            Update::UserStatus { .. } => UpdateKind::UserStatus,
            Update::User { .. } => UpdateKind::User,
            Update::NewMessage => UpdateKind::NewMessage,
            Update::DeleteMessages => UpdateKind::DeleteMessages,
            Update::MessageContent => UpdateKind::MessageContent,
            Update::MessageEdited => UpdateKind::MessageEdited,
            Update::ConnectionState => UpdateKind::ConnectionState,
            Update::OptionValue => UpdateKind::OptionValue,
            Update::Supergroup => UpdateKind::Supergroup,
            Update::BasicGroup => UpdateKind::BasicGroup,
            Update::UserFullInfo => UpdateKind::UserFullInfo,
            Update::HavePendingNotifications => UpdateKind::HavePendingNotifications,
            Update::Unknown => UpdateKind::Unknown,
        }
    }

    /// Chat the update refers to, if any.
    pub fn chat_id(&self) -> Option<ChatId> {
        match self {
            Update::NewChat { chat } => Some(chat.id),
            Update::ChatPosition { chat_id, .. }
            | Update::ChatLastMessage { chat_id, .. }
            | Update::ChatReadInbox { chat_id, .. }
            | Update::ChatNotificationSettings { chat_id, .. }
            | Update::ChatAction { chat_id, .. } => Some(*chat_id),
            _ => None,
        }
    }

    pub fn authorization(state: AuthorizationState) -> Self {
        Update::AuthorizationState {
            authorization_state: state,
        }
    }
}

impl Routable for Update {
    type Kind = UpdateKind;

    fn kind(&self) -> UpdateKind {
        Update::kind(self)
    }
}
