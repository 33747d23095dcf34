//! Identifier aliases shared by the model, backend and renderer crates.

/// Chat identifier. Positive ids are private one-to-one chats, everything
/// else is a group or channel.
pub type ChatId = i64;

pub type UserId = i64;

pub type MessageId = i64;

/// Folder identifier as reported by the backend.
pub type FolderId = i32;

/// Id of the synthetic "All chats" folder that every chat belongs to.
pub const ALL_CHATS_FOLDER_ID: FolderId = -1;

/// Returns `true` when `id` denotes a private one-to-one chat.
pub fn is_private_chat(id: ChatId) -> bool {
    id > 0
}
