use std::collections::BTreeMap;

use chatterm_common::ids::is_private_chat;
use chatterm_common::{ChatId, FolderId, MessageId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
}

impl Message {
    pub fn new(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: ChatId,
    pub title: String,
    pub unread_count: u32,
    pub muted: bool,
    /// Sort key per owning folder; higher sorts first.
    pub positions: BTreeMap<FolderId, i64>,
    pub last_message: Option<Message>,
    pub chat_action: Option<String>,
    /// Loaded history, oldest first.
    pub messages: Vec<Message>,
}

impl Chat {
    pub fn new(id: ChatId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            unread_count: 0,
            muted: false,
            positions: BTreeMap::new(),
            last_message: None,
            chat_action: None,
            messages: Vec::new(),
        }
    }

    pub fn is_private(&self) -> bool {
        is_private_chat(self.id)
    }

    /// Sort key in `folder_id`, zero when the chat has none there.
    pub fn position_in(&self, folder_id: FolderId) -> i64 {
        self.positions.get(&folder_id).copied().unwrap_or(0)
    }

    pub fn has_message(&self, id: MessageId) -> bool {
        self.messages.iter().any(|m| m.id == id)
    }

    pub fn oldest_message_id(&self) -> Option<MessageId> {
        self.messages.first().map(|m| m.id)
    }
}
