use std::collections::HashMap;

use chatterm_common::{ChatId, FolderId};

use crate::chat::Chat;

/// An ordered view over a subset of chats.
///
/// `chats` keeps insertion order; `sorted` is always a permutation of it,
/// ordered by descending per-folder position with ties in insertion order.
#[derive(Debug, Clone)]
pub struct Folder {
    id: FolderId,
    title: String,
    chats: Vec<ChatId>,
    sorted: Vec<ChatId>,
    members: HashMap<ChatId, usize>,
    pub(crate) selected_chat_index: usize,
    pub(crate) top_index: usize,
}

impl Folder {
    pub fn new(id: FolderId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            chats: Vec::new(),
            sorted: Vec::new(),
            members: HashMap::new(),
            selected_chat_index: 0,
            top_index: 0,
        }
    }

    pub fn id(&self) -> FolderId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    pub fn contains(&self, chat_id: ChatId) -> bool {
        self.members.contains_key(&chat_id)
    }

    /// Chat ids in insertion order.
    pub fn chats(&self) -> &[ChatId] {
        &self.chats
    }

    /// Chat ids in display order.
    pub fn sorted_chats(&self) -> &[ChatId] {
        &self.sorted
    }

    pub fn sorted_index_of(&self, chat_id: ChatId) -> Option<usize> {
        self.sorted.iter().position(|id| *id == chat_id)
    }

    pub fn selected_chat_index(&self) -> usize {
        self.selected_chat_index
    }

    pub fn top_index(&self) -> usize {
        self.top_index
    }

    pub fn selected_chat_id(&self) -> Option<ChatId> {
        self.sorted.get(self.selected_chat_index).copied()
    }

    /// Add a chat at the end of insertion order. Returns `false` if it is
    /// already a member. The caller resorts.
    pub(crate) fn push(&mut self, chat_id: ChatId) -> bool {
        if self.members.contains_key(&chat_id) {
            return false;
        }
        self.members.insert(chat_id, self.chats.len());
        self.chats.push(chat_id);
        self.sorted.push(chat_id);
        true
    }

    /// Rebuild display order from insertion order with a stable sort on
    /// descending position.
    pub(crate) fn resort(&mut self, chats: &HashMap<ChatId, Chat>) {
        let folder_id = self.id;
        let key = |id: &ChatId| {
            chats
                .get(id)
                .map(|chat| chat.position_in(folder_id))
                .unwrap_or(0)
        };
        let mut sorted = self.chats.clone();
        sorted.sort_by(|a, b| key(b).cmp(&key(a)));
        self.sorted = sorted;
    }
}
