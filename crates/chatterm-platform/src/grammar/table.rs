use chatterm_common::{Command, PlatformError};

use super::pattern::CommandPattern;

/// Parameters accepted by the folder-jump pattern.
pub const FOLDER_PARAMETERS: &str = "0123456789$";

/// Folder-jump parameter meaning "last folder".
pub const LAST_FOLDER_PARAMETER: char = '$';

/// How a matched pattern becomes a [`Command`].
#[derive(Debug, Clone)]
enum Target {
    Fixed(Command),
    Parameter(fn(char) -> Option<Command>),
}

/// One row of the command table.
#[derive(Debug, Clone)]
pub struct CommandEntry {
    pattern: CommandPattern,
    target: Target,
}

impl CommandEntry {
    pub fn literal(text: &str, command: Command) -> Result<Self, PlatformError> {
        if text.is_empty() {
            return Err(PlatformError::InvalidCommandPattern {
                pattern: text.to_string(),
                reason: "empty key sequence".into(),
            });
        }
        Ok(Self {
            pattern: CommandPattern::literal(text),
            target: Target::Fixed(command),
        })
    }

    pub fn parameterized(
        template: &str,
        allowed: &str,
        resolve: fn(char) -> Option<Command>,
    ) -> Result<Self, PlatformError> {
        Ok(Self {
            pattern: CommandPattern::parameterized(template, allowed)?,
            target: Target::Parameter(resolve),
        })
    }

    pub fn pattern(&self) -> &CommandPattern {
        &self.pattern
    }

    pub fn could_complete(&self, input: &str) -> bool {
        self.pattern.could_complete(input)
    }

    /// The command for an exact match of `input`, if any.
    pub fn resolve(&self, input: &str) -> Option<Command> {
        let parameter = self.pattern.matches(input)?;
        match (&self.target, parameter) {
            (Target::Fixed(command), _) => Some(*command),
            (Target::Parameter(resolve), Some(c)) => resolve(c),
            (Target::Parameter(_), None) => None,
        }
    }
}

/// Ordered set of command patterns.
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    pub fn new(entries: Vec<CommandEntry>) -> Self {
        Self { entries }
    }

    /// The built-in key map.
    ///
    /// Fails only if one of the static patterns is malformed.
    pub fn default_table() -> Result<Self, PlatformError> {
        Ok(Self::new(vec![
            CommandEntry::literal("q", Command::Quit)?,
            CommandEntry::literal("j", Command::MoveDown)?,
            CommandEntry::literal("k", Command::MoveUp)?,
            CommandEntry::literal("gg", Command::MoveToTop)?,
            CommandEntry::literal("G", Command::MoveToBottom)?,
            CommandEntry::literal("gt", Command::NextFolder)?,
            CommandEntry::literal("gT", Command::PreviousFolder)?,
            CommandEntry::parameterized("g_t", FOLDER_PARAMETERS, folder_command)?,
            CommandEntry::literal("<C-w>h", Command::MoveSeparatorLeft)?,
            CommandEntry::literal("<C-w>l", Command::MoveSeparatorRight)?,
            CommandEntry::literal("R", Command::LoadChats)?,
            CommandEntry::literal("l", Command::LoadMessages)?,
        ]))
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Entries whose pattern can still be completed from `input`.
    pub fn candidates<'a>(&'a self, input: &'a str) -> impl Iterator<Item = &'a CommandEntry> {
        self.entries.iter().filter(move |e| e.could_complete(input))
    }
}

fn folder_command(parameter: char) -> Option<Command> {
    if parameter == LAST_FOLDER_PARAMETER {
        return Some(Command::LastFolder);
    }
    parameter
        .to_digit(10)
        .map(|digit| Command::SelectFolder(digit as usize))
}
