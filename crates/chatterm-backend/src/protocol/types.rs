use chatterm_common::{ChatId, FolderId, MessageId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub enum AuthorizationState {
    WaitPhoneNumber,
    WaitCode,
    WaitPassword {
        #[serde(default)]
        password_hint: String,
    },
    Ready,
    LoggingOut,
    Closing,
    Closed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatInfo {
    pub id: ChatId,
    pub title: String,
    #[serde(default)]
    pub unread_count: u32,
}

/// Chat list a position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub enum ChatList {
    /// The main list, shown as the "All chats" folder.
    Main,
    Archive,
    Folder { folder_id: FolderId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPosition {
    pub list: ChatList,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub id: MessageId,
    pub content: MessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub enum MessageContent {
    Text { text: String },
    Photo,
    Audio,
    Video,
    VoiceNote,
    VideoNote,
    Document,
    Sticker,
    AnimatedEmoji { emoji: String },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// When set, the chat follows its scope default and `mute_for` is
    /// meaningless.
    #[serde(default)]
    pub use_default_mute_for: bool,
    /// Seconds left until unmute; zero means not muted.
    #[serde(default)]
    pub mute_for: i32,
}

impl NotificationSettings {
    pub fn is_muted(&self) -> bool {
        self.mute_for != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub enum NotificationScope {
    PrivateChats,
    GroupChats,
    ChannelChats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderInfo {
    pub id: FolderId,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub enum MessageSender {
    User { user_id: UserId },
    Chat { chat_id: ChatId },
}

impl MessageSender {
    pub fn id(&self) -> i64 {
        match self {
            MessageSender::User { user_id } => *user_id,
            MessageSender::Chat { chat_id } => *chat_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub enum ChatAction {
    Typing,
    ChoosingSticker,
    RecordingVideoNote,
    RecordingVoiceNote,
    UploadingDocument,
    UploadingPhoto,
    UploadingVideo,
    UploadingVideoNote,
    UploadingVoiceNote,
    Cancel,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub enum UserStatus {
    Online,
    Offline,
    Recently,
    LastWeek,
    LastMonth,
    #[serde(other)]
    Empty,
}

impl UserStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, UserStatus::Online)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: Option<String>,
}
