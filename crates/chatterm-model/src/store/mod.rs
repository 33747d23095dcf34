//! The domain model store.

mod operations;

use std::collections::{BTreeMap, HashMap};

use chatterm_common::{ChatId, FolderId, UserId, ALL_CHATS_FOLDER_ID};

use crate::chat::Chat;
use crate::folder::Folder;
use crate::user::User;
use crate::viewport::Viewport;

pub const ALL_CHATS_TITLE: &str = "All chats";

/// Chat list a position update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRef {
    /// The "All chats" folder.
    Main,
    /// Archived chats. Not shown by this client.
    Archive,
    Folder(FolderId),
}

/// Result of a position update that landed in a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionChange {
    pub folder_index: usize,
    /// Whether the chat now sits inside the selected folder's window.
    pub visible: bool,
}

pub struct Model {
    pub(crate) chats: HashMap<ChatId, Chat>,
    /// Index 0 is always "All chats".
    pub(crate) folders: Vec<Folder>,
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) selected_folder_index: usize,
    pub(crate) viewport: Viewport,
}

impl Model {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            chats: HashMap::new(),
            folders: vec![Folder::new(ALL_CHATS_FOLDER_ID, ALL_CHATS_TITLE)],
            users: BTreeMap::new(),
            selected_folder_index: 0,
            viewport,
        }
    }

    // -- Accessors --

    pub fn chat(&self, id: ChatId) -> Option<&Chat> {
        self.chats.get(&id)
    }

    pub fn chat_count(&self) -> usize {
        self.chats.len()
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn users(&self) -> &BTreeMap<UserId, User> {
        &self.users
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn folder(&self, index: usize) -> Option<&Folder> {
        self.folders.get(index)
    }

    pub fn folder_index_of(&self, id: FolderId) -> Option<usize> {
        self.folders.iter().position(|f| f.id() == id)
    }

    pub fn all_chats(&self) -> &Folder {
        &self.folders[0]
    }

    pub fn selected_folder_index(&self) -> usize {
        self.selected_folder_index
    }

    pub fn selected_folder(&self) -> &Folder {
        &self.folders[self.selected_folder_index]
    }

    pub fn selected_chat(&self) -> Option<&Chat> {
        self.selected_folder()
            .selected_chat_id()
            .and_then(|id| self.chats.get(&id))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Chats of a folder in display order.
    pub fn sorted_chats_of<'a>(&'a self, folder: &'a Folder) -> impl Iterator<Item = &'a Chat> + 'a {
        folder
            .sorted_chats()
            .iter()
            .filter_map(move |id| self.chats.get(id))
    }
}

#[cfg(test)]
mod tests;
