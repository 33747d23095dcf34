use serde::{Deserialize, Serialize};

/// User-tunable settings persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Horizontal offset of the chat list / message pane separator, in
    /// columns relative to the default split.
    pub separator_offset: i32,
    /// Initial mute state for newly seen group and channel chats.
    pub mute_channels_by_default: bool,
}
