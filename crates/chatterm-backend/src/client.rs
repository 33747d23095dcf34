//! Backend client contract.

use async_trait::async_trait;
use chatterm_common::{BackendError, ChatId, FolderId, MessageId};
use chatterm_platform::StorageDirs;

/// Number of chats requested per `load_chats` call.
pub const LOAD_CHATS_LIMIT: usize = 20;

/// One rendered history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMessage {
    pub id: MessageId,
    pub text: String,
}

/// A page of chat history, newest message first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagesPage {
    pub messages: Vec<PageMessage>,
}

impl MessagesPage {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// A messaging backend.
///
/// Implementations push [`Update`](crate::Update)s through the channel they
/// hand out on construction. Requests never mutate client state directly;
/// their effects arrive as updates.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Run the backend until it reaches the closed state.
    async fn start(&self, dirs: &StorageDirs) -> Result<(), BackendError>;

    /// Ask for more chats of a chat list; they arrive as updates.
    async fn load_chats(&self, folder_id: FolderId) -> Result<(), BackendError>;

    /// Fetch history older than `from_message_id` (`0` for the newest
    /// messages). `None` means the chat is unknown to the backend.
    async fn load_messages(
        &self,
        chat_id: ChatId,
        from_message_id: MessageId,
        offset: i32,
        limit: usize,
    ) -> Result<Option<MessagesPage>, BackendError>;

    async fn set_phone_number(&self, phone_number: &str) -> Result<(), BackendError>;

    async fn check_code(&self, code: &str) -> Result<(), BackendError>;

    async fn check_password(&self, password: &str) -> Result<(), BackendError>;

    /// Request shutdown; `start` returns once the backend has closed.
    async fn close(&self) -> Result<(), BackendError>;
}
