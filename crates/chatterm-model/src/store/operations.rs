//! Mutations applied from backend updates.
//!
//! References to chats, users or folders the model has not seen yet are
//! tolerated: the mutation becomes a no-op and reports `false`/`None`.

use chatterm_common::{ChatId, FolderId, UserId};
use tracing::{debug, trace};

use crate::chat::{Chat, Message};
use crate::folder::Folder;
use crate::user::User;

use super::{ListRef, Model, PositionChange};

impl Model {
    /// Add a chat to "All chats". Returns `false` if the id is already known.
    pub fn add_chat(&mut self, chat: Chat) -> bool {
        if self.chats.contains_key(&chat.id) {
            trace!(chat_id = chat.id, "duplicate chat ignored");
            return false;
        }
        let id = chat.id;
        self.chats.insert(id, chat);
        let all = &mut self.folders[0];
        all.push(id);
        all.resort(&self.chats);
        true
    }

    /// Set the sort key of a chat in the folder `list` resolves to, adding
    /// the chat to that folder on first sight.
    ///
    /// Returns `None` for the archive, for folders not created yet and for
    /// chats not in "All chats".
    pub fn set_chat_position(
        &mut self,
        chat_id: ChatId,
        list: ListRef,
        order: i64,
    ) -> Option<PositionChange> {
        let folder_index = match list {
            ListRef::Main => 0,
            ListRef::Archive => {
                trace!(chat_id, "archive positions are not tracked");
                return None;
            }
            ListRef::Folder(folder_id) => match self.folder_index_of(folder_id) {
                Some(index) => index,
                None => {
                    debug!(chat_id, folder_id, "position for unknown folder");
                    return None;
                }
            },
        };

        let chat = match self.chats.get_mut(&chat_id) {
            Some(chat) => chat,
            None => {
                debug!(chat_id, "position for unknown chat");
                return None;
            }
        };

        let folder = &mut self.folders[folder_index];
        chat.positions.insert(folder.id(), order);
        folder.push(chat_id);
        folder.resort(&self.chats);

        Some(PositionChange {
            folder_index,
            visible: self.is_chat_visible(chat_id),
        })
    }

    /// Insert a folder if its id is new. Returns the folder's index.
    pub fn get_or_create_folder(&mut self, id: FolderId, title: &str) -> usize {
        if let Some(index) = self.folder_index_of(id) {
            return index;
        }
        self.folders.push(Folder::new(id, title));
        self.folders.len() - 1
    }

    /// Insert a user if its id is new; the first record seen wins. Returns
    /// whether the user was inserted.
    pub fn get_or_create_user(&mut self, user: User) -> bool {
        if self.users.contains_key(&user.id) {
            return false;
        }
        self.users.insert(user.id, user);
        true
    }

    pub fn set_unread_count(&mut self, chat_id: ChatId, count: u32) -> bool {
        self.with_chat(chat_id, |chat| chat.unread_count = count)
    }

    pub fn set_muted(&mut self, chat_id: ChatId, muted: bool) -> bool {
        self.with_chat(chat_id, |chat| chat.muted = muted)
    }

    pub fn set_last_message(&mut self, chat_id: ChatId, message: Option<Message>) -> bool {
        self.with_chat(chat_id, |chat| chat.last_message = message)
    }

    /// Overwrite the chat action; `None` clears it.
    pub fn set_chat_action(&mut self, chat_id: ChatId, action: Option<String>) -> bool {
        self.with_chat(chat_id, |chat| chat.chat_action = action)
    }

    pub fn set_user_online(&mut self, user_id: UserId, online: bool) -> bool {
        match self.users.get_mut(&user_id) {
            Some(user) => {
                user.online = online;
                true
            }
            None => false,
        }
    }

    /// Use the chat's last message as its first loaded message when no
    /// history is loaded yet. Returns whether a message was seeded.
    pub fn seed_history(&mut self, chat_id: ChatId) -> bool {
        let Some(chat) = self.chats.get_mut(&chat_id) else {
            return false;
        };
        if !chat.messages.is_empty() {
            return false;
        }
        match chat.last_message.clone() {
            Some(last) => {
                chat.messages.push(last);
                true
            }
            None => false,
        }
    }

    /// Prepend a newest-first page of older messages, skipping ids that are
    /// already loaded. Returns how many messages were added.
    pub fn prepend_history(&mut self, chat_id: ChatId, page: Vec<Message>) -> usize {
        let Some(chat) = self.chats.get_mut(&chat_id) else {
            return 0;
        };
        let mut added = 0;
        for message in page {
            if chat.has_message(message.id) {
                continue;
            }
            chat.messages.insert(0, message);
            added += 1;
        }
        added
    }

    fn with_chat(&mut self, chat_id: ChatId, f: impl FnOnce(&mut Chat)) -> bool {
        match self.chats.get_mut(&chat_id) {
            Some(chat) => {
                f(chat);
                true
            }
            None => {
                trace!(chat_id, "update for unknown chat");
                false
            }
        }
    }
}
