//! Field-level differences between two frames.

use std::collections::BTreeMap;

use chatterm_common::UserId;

use crate::frame::{ChatView, FolderView, Frame, MessageView, UserView};

/// Fields of a frame that changed. `None` means unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameDiff {
    pub folders: Option<Vec<FolderView>>,
    pub chats: Option<Vec<ChatView>>,
    pub messages: Option<Vec<MessageView>>,
    pub users: Option<BTreeMap<UserId, UserView>>,
    pub selected_folder_index: Option<usize>,
    pub selected_chat: Option<Option<ChatView>>,
    pub selected_chat_index: Option<usize>,
    pub command_input: Option<String>,
    pub separator_offset: Option<i32>,
}

impl FrameDiff {
    /// A diff carrying every field of `frame`.
    pub fn full(frame: &Frame) -> Self {
        Self {
            folders: Some(frame.folders.clone()),
            chats: Some(frame.chats.clone()),
            messages: Some(frame.messages.clone()),
            users: Some(frame.users.clone()),
            selected_folder_index: Some(frame.selected_folder_index),
            selected_chat: Some(frame.selected_chat.clone()),
            selected_chat_index: Some(frame.selected_chat_index),
            command_input: Some(frame.command_input.clone()),
            separator_offset: Some(frame.separator_offset),
        }
    }

    pub fn is_changed(&self) -> bool {
        *self != FrameDiff::default()
    }

    /// Whether the folder tab line needs a repaint.
    pub fn touches_tabs(&self) -> bool {
        self.folders.is_some() || self.selected_folder_index.is_some()
    }

    /// Whether the chat list column needs a repaint.
    pub fn touches_chat_list(&self) -> bool {
        self.chats.is_some()
            || self.users.is_some()
            || self.selected_chat_index.is_some()
            || self.separator_offset.is_some()
    }

    /// Whether the message column needs a repaint.
    pub fn touches_messages(&self) -> bool {
        self.messages.is_some() || self.selected_chat.is_some() || self.separator_offset.is_some()
    }
}

fn changed<T: PartialEq + Clone>(prev: &T, next: &T) -> Option<T> {
    (prev != next).then(|| next.clone())
}

/// Compare two frames field by field. Sequences compare element-wise, so a
/// reorder with equal elements counts as a change.
pub fn diff(prev: &Frame, next: &Frame) -> FrameDiff {
    FrameDiff {
        folders: changed(&prev.folders, &next.folders),
        chats: changed(&prev.chats, &next.chats),
        messages: changed(&prev.messages, &next.messages),
        users: changed(&prev.users, &next.users),
        selected_folder_index: changed(&prev.selected_folder_index, &next.selected_folder_index),
        selected_chat: changed(&prev.selected_chat, &next.selected_chat),
        selected_chat_index: changed(&prev.selected_chat_index, &next.selected_chat_index),
        command_input: changed(&prev.command_input, &next.command_input),
        separator_offset: changed(&prev.separator_offset, &next.separator_offset),
    }
}

impl Frame {
    /// Overwrite every field the diff carries.
    pub fn apply(&mut self, diff: &FrameDiff) {
        if let Some(folders) = &diff.folders {
            self.folders = folders.clone();
        }
        if let Some(chats) = &diff.chats {
            self.chats = chats.clone();
        }
        if let Some(messages) = &diff.messages {
            self.messages = messages.clone();
        }
        if let Some(users) = &diff.users {
            self.users = users.clone();
        }
        if let Some(index) = diff.selected_folder_index {
            self.selected_folder_index = index;
        }
        if let Some(chat) = &diff.selected_chat {
            self.selected_chat = chat.clone();
        }
        if let Some(index) = diff.selected_chat_index {
            self.selected_chat_index = index;
        }
        if let Some(input) = &diff.command_input {
            self.command_input = input.clone();
        }
        if let Some(offset) = diff.separator_offset {
            self.separator_offset = offset;
        }
    }
}
