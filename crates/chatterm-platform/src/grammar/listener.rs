use chatterm_common::Command;

use super::table::CommandTable;

/// A normalized keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStroke {
    /// Clears the pending input.
    Escape,
    /// Textual token: a literal character or a bracketed chord like `<C-w>`.
    Key(String),
}

impl KeyStroke {
    pub fn key(token: impl Into<String>) -> Self {
        KeyStroke::Key(token.into())
    }
}

/// Result of feeding one keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Pending input to show on the command line; empty once the buffer
    /// was cleared.
    pub pending: String,
    /// Command recognized by this keystroke.
    pub command: Option<Command>,
}

/// Pending-input state machine over a [`CommandTable`].
#[derive(Debug, Clone)]
pub struct CommandListener {
    table: CommandTable,
    buffer: String,
}

impl CommandListener {
    pub fn new(table: CommandTable) -> Self {
        Self {
            table,
            buffer: String::new(),
        }
    }

    pub fn pending(&self) -> &str {
        &self.buffer
    }

    pub fn feed(&mut self, stroke: KeyStroke) -> KeyOutcome {
        let token = match stroke {
            KeyStroke::Escape => return self.reset(None),
            KeyStroke::Key(token) => token,
        };
        self.buffer.push_str(&token);

        let mut candidates = 0usize;
        let mut recognized = None;
        for entry in self.table.candidates(&self.buffer) {
            candidates += 1;
            if let Some(command) = entry.resolve(&self.buffer) {
                recognized = Some(command);
                break;
            }
        }

        if let Some(command) = recognized {
            tracing::debug!(input = %self.buffer, command = command.label(), "command recognized");
            return self.reset(Some(command));
        }

        if candidates == 0 {
            tracing::trace!(input = %self.buffer, "no command matches, dropping input");
            return self.reset(None);
        }

        KeyOutcome {
            pending: self.buffer.clone(),
            command: None,
        }
    }

    fn reset(&mut self, command: Option<Command>) -> KeyOutcome {
        self.buffer.clear();
        KeyOutcome {
            pending: String::new(),
            command,
        }
    }
}
