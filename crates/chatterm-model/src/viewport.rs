//! Selection and scroll-window control.
//!
//! Each folder keeps its own selected index and window top; the model keeps
//! the selected folder. Chat selection clamps, folder selection wraps.

use chatterm_common::ChatId;

use crate::chat::{Chat, Message};
use crate::folder::Folder;
use crate::store::Model;

/// Terminal rows that never hold chat rows (tabs, borders, command line).
const RESERVED_ROWS: u16 = 4;

/// Rows each chat occupies in the list.
const ROWS_PER_CHAT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub visible_chats: usize,
    pub visible_messages: usize,
}

impl Viewport {
    pub fn new(visible_chats: usize, visible_messages: usize) -> Self {
        Self {
            visible_chats: visible_chats.max(1),
            visible_messages: visible_messages.max(1),
        }
    }

    /// Window sizes for a terminal of `rows` lines.
    pub fn for_terminal_rows(rows: u16) -> Self {
        let chats = usize::from(rows.saturating_sub(RESERVED_ROWS) / ROWS_PER_CHAT).max(1);
        Self::new(chats, chats * 2)
    }
}

impl Folder {
    /// Move the window so the selection is inside it.
    fn follow_selection(&mut self, visible: usize) {
        if self.selected_chat_index < self.top_index {
            self.top_index = self.selected_chat_index;
        } else if self.selected_chat_index >= self.top_index + visible {
            self.top_index = self.selected_chat_index + 1 - visible;
        }
    }

    /// Chat ids currently inside the window.
    pub fn window(&self, visible: usize) -> &[ChatId] {
        let sorted = self.sorted_chats();
        let start = self.top_index.min(sorted.len());
        let end = (start + visible).min(sorted.len());
        &sorted[start..end]
    }
}

impl Model {
    /// Select a chat in the selected folder, clamping to the folder's range.
    /// Returns whether the selection changed.
    pub fn select_chat_at(&mut self, index: isize) -> bool {
        let visible = self.viewport.visible_chats;
        let folder = &mut self.folders[self.selected_folder_index];
        if folder.is_empty() {
            return false;
        }
        let last = folder.len() - 1;
        let index = usize::try_from(index).unwrap_or(0).min(last);
        if index == folder.selected_chat_index {
            return false;
        }
        folder.selected_chat_index = index;
        folder.follow_selection(visible);
        true
    }

    /// Move the chat selection by `delta`, clamped.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        let current = self.selected_folder().selected_chat_index() as isize;
        self.select_chat_at(current + delta)
    }

    pub fn select_first_chat(&mut self) -> bool {
        self.select_chat_at(0)
    }

    pub fn select_last_chat(&mut self) -> bool {
        let len = self.selected_folder().len() as isize;
        self.select_chat_at(len - 1)
    }

    /// Select a folder, wrapping: `-1` is the last folder and one past the
    /// last is the first. Returns whether the selection changed.
    pub fn select_folder_at(&mut self, index: isize) -> bool {
        let count = self.folders.len() as isize;
        let index = if index < 0 {
            count - 1
        } else if index >= count {
            0
        } else {
            index
        };
        let index = index as usize;
        if index == self.selected_folder_index {
            return false;
        }
        self.selected_folder_index = index;
        true
    }

    /// Jump to folder `number`, clamping out-of-range numbers to the last
    /// folder.
    pub fn select_folder_number(&mut self, number: usize) -> bool {
        let last = self.folders.len() - 1;
        self.select_folder_at(number.min(last) as isize)
    }

    pub fn select_last_folder(&mut self) -> bool {
        self.select_folder_at(self.folders.len() as isize - 1)
    }

    pub fn next_folder(&mut self) -> bool {
        self.select_folder_at(self.selected_folder_index as isize + 1)
    }

    pub fn previous_folder(&mut self) -> bool {
        self.select_folder_at(self.selected_folder_index as isize - 1)
    }

    /// Change window sizes and pull every folder's window back over its
    /// selection.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        for folder in &mut self.folders {
            folder.follow_selection(viewport.visible_chats);
        }
        true
    }

    pub fn top_index(&self) -> usize {
        self.selected_folder().top_index()
    }

    /// Last index of the window, which may lie past the end of the list.
    pub fn bottom_index(&self) -> usize {
        self.top_index() + self.viewport.visible_chats - 1
    }

    /// Selected chat's row inside the window.
    pub fn relative_selected_index(&self) -> usize {
        let folder = self.selected_folder();
        folder.selected_chat_index() - folder.top_index()
    }

    /// Whether `chat_id` is in the selected folder and inside its window.
    pub fn is_chat_visible(&self, chat_id: ChatId) -> bool {
        match self.selected_folder().sorted_index_of(chat_id) {
            Some(index) => index >= self.top_index() && index <= self.bottom_index(),
            None => false,
        }
    }

    /// Chats inside the selected folder's window, in display order.
    pub fn visible_chats(&self) -> Vec<&Chat> {
        self.selected_folder()
            .window(self.viewport.visible_chats)
            .iter()
            .filter_map(|id| self.chats.get(id))
            .collect()
    }

    /// Newest loaded messages of the selected chat that fit the window,
    /// oldest first.
    pub fn visible_messages(&self) -> &[Message] {
        match self.selected_chat() {
            Some(chat) => {
                let start = chat
                    .messages
                    .len()
                    .saturating_sub(self.viewport.visible_messages);
                &chat.messages[start..]
            }
            None => &[],
        }
    }
}
