use super::Command;

impl Command {
    /// Human-readable label, used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Quit => "Quit",
            Command::MoveUp => "Move Up",
            Command::MoveDown => "Move Down",
            Command::MoveToTop => "Move to Top",
            Command::MoveToBottom => "Move to Bottom",
            Command::NextFolder => "Next Folder",
            Command::PreviousFolder => "Previous Folder",
            Command::SelectFolder(_) => "Select Folder",
            Command::LastFolder => "Last Folder",
            Command::MoveSeparatorLeft => "Move Separator Left",
            Command::MoveSeparatorRight => "Move Separator Right",
            Command::LoadChats => "Load Chats",
            Command::LoadMessages => "Load Messages",
        }
    }

    /// One instance of every command kind.
    pub fn all() -> Vec<Command> {
        vec![
            Command::Quit,
            Command::MoveUp,
            Command::MoveDown,
            Command::MoveToTop,
            Command::MoveToBottom,
            Command::NextFolder,
            Command::PreviousFolder,
            Command::SelectFolder(0),
            Command::LastFolder,
            Command::MoveSeparatorLeft,
            Command::MoveSeparatorRight,
            Command::LoadChats,
            Command::LoadMessages,
        ]
    }
}
