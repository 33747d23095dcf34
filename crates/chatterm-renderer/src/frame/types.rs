use std::collections::BTreeMap;

use chatterm_common::{ChatId, FolderId, MessageId, UserId};
use chatterm_model::{Chat, Message, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: MessageId,
    pub text: String,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            text: message.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub id: ChatId,
    pub title: String,
    pub unread_count: u32,
    pub muted: bool,
    pub positions: BTreeMap<FolderId, i64>,
    pub last_message: Option<MessageView>,
    pub chat_action: Option<String>,
}

impl ChatView {
    /// Second line of a chat row: the running action, else the preview.
    pub fn preview(&self) -> &str {
        if let Some(action) = &self.chat_action {
            return action;
        }
        self.last_message
            .as_ref()
            .map(|m| m.text.as_str())
            .unwrap_or("")
    }

    pub fn is_private(&self) -> bool {
        chatterm_common::ids::is_private_chat(self.id)
    }
}

impl From<&Chat> for ChatView {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id,
            title: chat.title.clone(),
            unread_count: chat.unread_count,
            muted: chat.muted,
            positions: chat.positions.clone(),
            last_message: chat.last_message.as_ref().map(MessageView::from),
            chat_action: chat.chat_action.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderView {
    pub id: FolderId,
    pub title: String,
    pub selected_chat_index: usize,
    pub selected_chat: Option<ChatView>,
    pub unread_chats_count: usize,
    pub has_unmuted_unread_chat: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub id: UserId,
    pub online: bool,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            online: user.online,
        }
    }
}

/// Everything the terminal shows at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub folders: Vec<FolderView>,
    /// Chats inside the selected folder's window, in display order.
    pub chats: Vec<ChatView>,
    /// Newest loaded messages of the selected chat, oldest first.
    pub messages: Vec<MessageView>,
    /// Users behind the visible private chats.
    pub users: BTreeMap<UserId, UserView>,
    pub selected_folder_index: usize,
    pub selected_chat: Option<ChatView>,
    /// Row of the selected chat inside `chats`.
    pub selected_chat_index: usize,
    pub command_input: String,
    pub separator_offset: i32,
}
