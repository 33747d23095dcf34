//! Backend requests issued by commands.
//!
//! Handlers never await: they queue an [`Effect`], the event loop runs it on
//! its own task, and the [`EffectResult`] comes back through a channel to be
//! applied by the single writer.

use chatterm_backend::{Backend, MessagesPage};
use chatterm_common::{ChatId, FolderId, MessageId};
use chatterm_model::Message;

use super::core::{App, AppState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadChats {
        folder_id: FolderId,
    },
    LoadMessages {
        chat_id: ChatId,
        from_message_id: MessageId,
        limit: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectResult {
    /// `None` when the fetch failed or the backend does not know the chat.
    MessagesLoaded {
        chat_id: ChatId,
        page: Option<MessagesPage>,
    },
}

/// Run one effect against the backend.
pub async fn execute(backend: &dyn Backend, effect: Effect) -> Option<EffectResult> {
    match effect {
        Effect::LoadChats { folder_id } => {
            if let Err(e) = backend.load_chats(folder_id).await {
                tracing::warn!(folder_id, error = %e, "load chats failed");
            }
            None
        }
        Effect::LoadMessages {
            chat_id,
            from_message_id,
            limit,
        } => {
            let page = match backend
                .load_messages(chat_id, from_message_id, 0, limit)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(chat_id, error = %e, "load messages failed");
                    None
                }
            };
            Some(EffectResult::MessagesLoaded { chat_id, page })
        }
    }
}

impl AppState {
    /// Queue a history fetch for `chat_id` unless one is in flight or the
    /// message window is already full. Returns whether a fetch was queued.
    pub(super) fn request_messages(&mut self, chat_id: ChatId) -> bool {
        if self.loading_messages.contains(&chat_id) {
            tracing::trace!(chat_id, "history fetch already in flight");
            return false;
        }
        let Some(chat) = self.model.chat(chat_id) else {
            return false;
        };
        let wanted = self.model.viewport().visible_messages;
        let loaded = chat.messages.len();
        if loaded >= wanted {
            return false;
        }

        self.loading_messages.insert(chat_id);
        self.effects.push(Effect::LoadMessages {
            chat_id,
            from_message_id: chat.oldest_message_id().unwrap_or(0),
            limit: wanted - loaded,
        });
        true
    }

    /// Prepend a fetched page and keep paging while it made progress.
    pub(super) fn apply_messages(&mut self, chat_id: ChatId, page: Option<MessagesPage>) -> bool {
        self.loading_messages.remove(&chat_id);
        let Some(page) = page.filter(|page| !page.is_empty()) else {
            tracing::debug!(chat_id, "history exhausted");
            return false;
        };

        let messages = page
            .messages
            .into_iter()
            .map(|m| Message::new(m.id, m.text))
            .collect();
        let added = self.model.prepend_history(chat_id, messages);
        tracing::debug!(chat_id, added, "history page applied");
        if added == 0 {
            return false;
        }

        self.request_messages(chat_id);
        self.model.selected_chat().is_some_and(|chat| chat.id == chat_id)
    }
}

impl App {
    pub fn apply_effect_result(&mut self, result: EffectResult) -> bool {
        match result {
            EffectResult::MessagesLoaded { chat_id, page } => {
                self.state.apply_messages(chat_id, page)
            }
        }
    }
}
