use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chatterm_common::{BackendError, ChatId, FolderId, MessageId};
use chatterm_platform::StorageDirs;
use tokio::sync::{mpsc, Mutex, Notify};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::{Backend, MessagesPage, PageMessage, LOAD_CHATS_LIMIT};
use crate::protocol::{AuthorizationState, MessageInfo, Update};

use super::types::{LoginScript, Script};

const UPDATE_CHANNEL_CAPACITY: usize = 256;

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

pub struct ScriptBackend {
    login: Option<LoginScript>,
    updates: Mutex<Vec<Update>>,
    deferred: Mutex<VecDeque<Update>>,
    /// Oldest message first.
    history: HashMap<ChatId, Vec<MessageInfo>>,
    auth_state: Mutex<AuthorizationState>,
    tx: mpsc::Sender<Update>,
    ready: Notify,
    shutdown: CancellationToken,
    started: AtomicBool,
}

impl ScriptBackend {
    /// Build the backend. Returns the receiving end of its update stream.
    pub fn new(script: Script) -> (Self, mpsc::Receiver<Update>) {
        let (tx, rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);

        let history = script
            .history
            .into_iter()
            .map(|(chat_id, mut messages)| {
                messages.sort_by_key(|m| m.id);
                (chat_id, messages)
            })
            .collect();

        let backend = Self {
            login: script.login,
            updates: Mutex::new(script.updates),
            deferred: Mutex::new(script.deferred.into()),
            history,
            auth_state: Mutex::new(AuthorizationState::Closed),
            tx,
            ready: Notify::new(),
            shutdown: CancellationToken::new(),
            started: AtomicBool::new(false),
        };
        (backend, rx)
    }

    async fn emit(&self, update: Update) -> Result<(), BackendError> {
        self.tx.send(update).await.map_err(|_| BackendError::Closed)
    }

    async fn set_state(&self, state: AuthorizationState) -> Result<(), BackendError> {
        *self.auth_state.lock().await = state.clone();
        if state == AuthorizationState::Ready {
            self.ready.notify_one();
        }
        self.emit(Update::authorization(state)).await
    }

    /// Re-announce the current state after a rejected answer.
    async fn reject(&self, reason: &str) -> Result<(), BackendError> {
        let state = self.auth_state.lock().await.clone();
        self.emit(Update::authorization(state)).await?;
        Err(BackendError::RequestFailed(reason.to_string()))
    }

    async fn expect_state(&self, expected: &AuthorizationState) -> Result<(), BackendError> {
        let state = self.auth_state.lock().await;
        if std::mem::discriminant(&*state) != std::mem::discriminant(expected) {
            return Err(BackendError::RequestFailed(format!(
                "unexpected request in state {state:?}"
            )));
        }
        Ok(())
    }

    async fn finish(&self) -> Result<(), BackendError> {
        *self.auth_state.lock().await = AuthorizationState::Closed;
        if self
            .tx
            .send(Update::authorization(AuthorizationState::Closed))
            .await
            .is_err()
        {
            debug!("update receiver gone before close");
        }
        info!("script backend closed");
        Ok(())
    }
}

#[async_trait]
impl Backend for ScriptBackend {
    async fn start(&self, dirs: &StorageDirs) -> Result<(), BackendError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(BackendError::StartFailed(
                "script backend already started".into(),
            ));
        }
        info!(database = %dirs.database.display(), "script backend starting");

        if self.login.is_some() {
            self.set_state(AuthorizationState::WaitPhoneNumber).await?;
            tokio::select! {
                _ = self.ready.notified() => {}
                _ = self.shutdown.cancelled() => return self.finish().await,
            }
        } else {
            self.set_state(AuthorizationState::Ready).await?;
        }

        let updates = std::mem::take(&mut *self.updates.lock().await);
        for update in updates {
            self.emit(update).await?;
        }

        self.shutdown.cancelled().await;
        self.finish().await
    }

    async fn load_chats(&self, folder_id: FolderId) -> Result<(), BackendError> {
        let batch: Vec<Update> = {
            let mut deferred = self.deferred.lock().await;
            let n = deferred.len().min(LOAD_CHATS_LIMIT);
            deferred.drain(..n).collect()
        };
        debug!(folder_id, released = batch.len(), "load chats");
        for update in batch {
            self.emit(update).await?;
        }
        Ok(())
    }

    async fn load_messages(
        &self,
        chat_id: ChatId,
        from_message_id: MessageId,
        offset: i32,
        limit: usize,
    ) -> Result<Option<MessagesPage>, BackendError> {
        let Some(history) = self.history.get(&chat_id) else {
            return Ok(None);
        };

        let skip = usize::try_from(offset).unwrap_or(0);
        let messages = history
            .iter()
            .rev()
            .filter(|m| from_message_id == 0 || m.id < from_message_id)
            .skip(skip)
            .take(limit)
            .map(|m| PageMessage {
                id: m.id,
                text: m.content.display_text(),
            })
            .collect();

        Ok(Some(MessagesPage { messages }))
    }

    async fn set_phone_number(&self, phone_number: &str) -> Result<(), BackendError> {
        self.expect_state(&AuthorizationState::WaitPhoneNumber).await?;
        let Some(login) = &self.login else {
            return Err(BackendError::RequestFailed("no login scripted".into()));
        };
        if login.phone_number != phone_number {
            warn!("scripted login rejected phone number");
            return self.reject("PHONE_NUMBER_INVALID").await;
        }
        self.set_state(AuthorizationState::WaitCode).await
    }

    async fn check_code(&self, code: &str) -> Result<(), BackendError> {
        self.expect_state(&AuthorizationState::WaitCode).await?;
        let Some(login) = &self.login else {
            return Err(BackendError::RequestFailed("no login scripted".into()));
        };
        if login.code != code {
            return self.reject("PHONE_CODE_INVALID").await;
        }
        match &login.password {
            Some(_) => {
                self.set_state(AuthorizationState::WaitPassword {
                    password_hint: login.password_hint.clone(),
                })
                .await
            }
            None => self.set_state(AuthorizationState::Ready).await,
        }
    }

    async fn check_password(&self, password: &str) -> Result<(), BackendError> {
        self.expect_state(&AuthorizationState::WaitPassword {
            password_hint: String::new(),
        })
        .await?;
        let expected = self.login.as_ref().and_then(|l| l.password.as_deref());
        if expected != Some(password) {
            return self.reject("PASSWORD_HASH_INVALID").await;
        }
        self.set_state(AuthorizationState::Ready).await
    }

    async fn close(&self) -> Result<(), BackendError> {
        debug!("script backend close requested");
        self.shutdown.cancel();
        Ok(())
    }
}
