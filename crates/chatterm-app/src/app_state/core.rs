use std::collections::HashSet;

use chatterm_backend::{AuthorizationState, Update};
use chatterm_common::{ChatId, Command, Routed, Router};
use chatterm_config::SettingsStore;
use chatterm_model::{Model, Viewport};
use chatterm_platform::{CommandListener, CommandTable, KeyStroke};
use chatterm_renderer::FrameTracker;

use super::effects::Effect;
use super::{command_handlers, update_handlers, update_log};

/// Everything handlers may touch.
pub struct AppState {
    pub(super) model: Model,
    pub(super) settings: SettingsStore,
    pub(super) authorization: AuthorizationState,
    /// Effects queued by handlers, drained by the event loop.
    pub(super) effects: Vec<Effect>,
    /// Chats with a history fetch in flight.
    pub(super) loading_messages: HashSet<ChatId>,
    /// Terminal width, bounds the separator offset.
    pub(super) columns: u16,
    pub(super) should_exit: bool,
}

impl AppState {
    pub(super) fn new(settings: SettingsStore, columns: u16, rows: u16) -> Self {
        Self {
            model: Model::new(Viewport::for_terminal_rows(rows)),
            settings,
            authorization: AuthorizationState::Closed,
            effects: Vec::new(),
            loading_messages: HashSet::new(),
            columns,
            should_exit: false,
        }
    }
}

/// Top-level application: state plus the tables that dispatch into it.
pub struct App {
    pub(super) state: AppState,
    pub(super) updates: Router<AppState, Update>,
    pub(super) commands: Router<AppState, Command>,
    pub(super) listener: CommandListener,
    pub(super) tracker: FrameTracker,
}

impl App {
    /// Build the app for a terminal of `columns` x `rows`.
    pub fn new(settings: SettingsStore, table: CommandTable, columns: u16, rows: u16) -> Self {
        let updates = update_handlers::router();
        let commands = command_handlers::router();
        tracing::debug!(
            update_handlers = updates.len(),
            command_handlers = commands.len(),
            "dispatch tables built"
        );
        Self {
            state: AppState::new(settings, columns, rows),
            updates,
            commands,
            listener: CommandListener::new(table),
            tracker: FrameTracker::new(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.state.model
    }

    pub fn authorization(&self) -> &AuthorizationState {
        &self.state.authorization
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    pub fn apply_update(&mut self, update: &Update) -> bool {
        match self.updates.route(&mut self.state, update) {
            Routed::Handled { visible } => {
                tracing::debug!(
                    visible,
                    "{}",
                    update_log::summary(update, &self.state.model)
                );
                visible
            }
            Routed::Ignored => {
                tracing::trace!(kind = ?update.kind(), "ignored update");
                false
            }
            Routed::Unhandled => {
                tracing::debug!(kind = ?update.kind(), "unhandled update");
                false
            }
        }
    }

    pub fn apply_command(&mut self, command: &Command) -> bool {
        let routed = self.commands.route(&mut self.state, command);
        if routed == Routed::Unhandled {
            tracing::warn!(command = command.label(), "no handler for command");
        }
        routed.is_visible()
    }

    /// Feed a keystroke to the command listener and run whatever command it
    /// completes. The command line itself is part of the frame, so any
    /// keystroke may be visible.
    pub fn apply_key(&mut self, stroke: KeyStroke) -> bool {
        let before = self.listener.pending().len();
        let outcome = self.listener.feed(stroke);
        let input_changed = before != 0 || !outcome.pending.is_empty();
        match outcome.command {
            Some(command) => self.apply_command(&command) || input_changed,
            None => input_changed,
        }
    }

    /// New terminal size: resize the viewport and repaint everything.
    pub fn resize(&mut self, columns: u16, rows: u16) -> bool {
        self.state.columns = columns;
        self.state
            .model
            .set_viewport(Viewport::for_terminal_rows(rows));
        self.tracker.force_full();
        true
    }

    /// Effects queued since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.state.effects)
    }
}
