use std::collections::BTreeMap;
use std::path::Path;

use chatterm_common::{BackendError, ChatId};
use serde::{Deserialize, Serialize};

use crate::protocol::{MessageInfo, Update};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Credentials to check; without them the script starts authorized.
    pub login: Option<LoginScript>,
    /// Pushed once authorization is ready.
    pub updates: Vec<Update>,
    /// Released in batches by `load_chats`.
    pub deferred: Vec<Update>,
    /// Chat history, any order.
    pub history: BTreeMap<ChatId, Vec<MessageInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginScript {
    pub phone_number: String,
    pub code: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub password_hint: String,
}

/// Read a script file. A missing file is an empty script.
pub fn load_script(path: &Path) -> Result<Script, BackendError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no update script, starting empty");
        return Ok(Script::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        BackendError::ScriptError(format!("failed to read {}: {e}", path.display()))
    })?;

    let script: Script = serde_json::from_str(&content)
        .map_err(|e| BackendError::ScriptError(format!("failed to parse script: {e}")))?;

    tracing::info!(
        path = %path.display(),
        updates = script.updates.len(),
        deferred = script.deferred.len(),
        chats_with_history = script.history.len(),
        "loaded update script"
    );
    Ok(script)
}
