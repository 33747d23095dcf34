use serde::{Deserialize, Serialize};

use crate::router::Routable;

/// Every user-triggerable command in the client.
///
/// The grammar engine resolves keystroke sequences to a `Command`; the app
/// routes it to the handler registered for its [`CommandKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Quit,

    // -- Chat list --
    MoveUp,
    MoveDown,
    MoveToTop,
    MoveToBottom,

    // -- Folders --
    NextFolder,
    PreviousFolder,
    SelectFolder(usize),
    LastFolder,

    // -- Layout --
    MoveSeparatorLeft,
    MoveSeparatorRight,

    // -- Backend --
    LoadChats,
    LoadMessages,
}

/// Payload-free discriminant of [`Command`], used as the router key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Quit,
    MoveUp,
    MoveDown,
    MoveToTop,
    MoveToBottom,
    NextFolder,
    PreviousFolder,
    SelectFolder,
    LastFolder,
    MoveSeparatorLeft,
    MoveSeparatorRight,
    LoadChats,
    LoadMessages,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Quit => CommandKind::Quit,
            Command::MoveUp => CommandKind::MoveUp,
            Command::MoveDown => CommandKind::MoveDown,
            Command::MoveToTop => CommandKind::MoveToTop,
            Command::MoveToBottom => CommandKind::MoveToBottom,
            Command::NextFolder => CommandKind::NextFolder,
            Command::PreviousFolder => CommandKind::PreviousFolder,
            Command::SelectFolder(_) => CommandKind::SelectFolder,
            Command::LastFolder => CommandKind::LastFolder,
            Command::MoveSeparatorLeft => CommandKind::MoveSeparatorLeft,
            Command::MoveSeparatorRight => CommandKind::MoveSeparatorRight,
            Command::LoadChats => CommandKind::LoadChats,
            Command::LoadMessages => CommandKind::LoadMessages,
        }
    }
}

impl Routable for Command {
    type Kind = CommandKind;

    fn kind(&self) -> CommandKind {
        Command::kind(self)
    }
}
