//! One-line display strings for message content and chat actions.

use crate::protocol::{ChatAction, MessageContent};
use crate::sanitize::sanitize;

pub const EMPTY_MESSAGE: &str = "<empty>";
pub const UNSUPPORTED_CHARACTERS: &str = "<unsupported characters>";

impl MessageContent {
    fn raw_text(&self) -> &str {
        match self {
            MessageContent::Text { text } => text.as_str(),
            MessageContent::Photo => "Photo",
            MessageContent::Audio => "Audio",
            MessageContent::Video => "Video",
            MessageContent::VoiceNote => "Voice message",
            MessageContent::VideoNote => "Video message",
            MessageContent::Document => "Document",
            MessageContent::Sticker => "Sticker",
            MessageContent::AnimatedEmoji { emoji } => emoji.as_str(),
            MessageContent::Unsupported => "Unsupported message",
        }
    }

    /// Sanitized single-line rendering of the content.
    pub fn display_text(&self) -> String {
        let raw = self.raw_text();
        let text = sanitize(raw).replace(['\n', '\r'], " ");
        if !text.is_empty() {
            return text;
        }
        if raw.is_empty() {
            EMPTY_MESSAGE.to_string()
        } else {
            UNSUPPORTED_CHARACTERS.to_string()
        }
    }
}

/// What a chat action does to the chat's action line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionDisplay {
    Show(&'static str),
    Clear,
    Ignore,
}

impl ChatAction {
    pub fn display(&self) -> ActionDisplay {
        let label = match self {
            ChatAction::Typing => "Typing...",
            ChatAction::ChoosingSticker => "Choosing sticker...",
            ChatAction::RecordingVideoNote => "Recording video message...",
            ChatAction::RecordingVoiceNote => "Recording voice message...",
            ChatAction::UploadingDocument => "Uploading document...",
            ChatAction::UploadingPhoto => "Uploading photo...",
            ChatAction::UploadingVideo => "Uploading video...",
            ChatAction::UploadingVideoNote => "Uploading video message...",
            ChatAction::UploadingVoiceNote => "Uploading voice message...",
            ChatAction::Cancel => return ActionDisplay::Clear,
            ChatAction::Other => return ActionDisplay::Ignore,
        };
        ActionDisplay::Show(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content() {
        let content = MessageContent::Text {
            text: "hello".into(),
        };
        assert_eq!(content.display_text(), "hello");
    }

    #[test]
    fn multiline_text_is_flattened() {
        let content = MessageContent::Text {
            text: "one\ntwo".into(),
        };
        assert_eq!(content.display_text(), "one two");
    }

    #[test]
    fn media_labels() {
        assert_eq!(MessageContent::Photo.display_text(), "Photo");
        assert_eq!(MessageContent::VoiceNote.display_text(), "Voice message");
        assert_eq!(MessageContent::VideoNote.display_text(), "Video message");
        assert_eq!(MessageContent::Sticker.display_text(), "Sticker");
        assert_eq!(MessageContent::Unsupported.display_text(), "Unsupported message");
    }

    #[test]
    fn empty_and_unrenderable_text() {
        let empty = MessageContent::Text { text: String::new() };
        assert_eq!(empty.display_text(), EMPTY_MESSAGE);

        let emoji_only = MessageContent::AnimatedEmoji {
            emoji: "\u{1F600}".into(),
        };
        assert_eq!(emoji_only.display_text(), UNSUPPORTED_CHARACTERS);
    }

    #[test]
    fn chat_action_labels() {
        assert_eq!(ChatAction::Typing.display(), ActionDisplay::Show("Typing..."));
        assert_eq!(
            ChatAction::UploadingVoiceNote.display(),
            ActionDisplay::Show("Uploading voice message...")
        );
        assert_eq!(ChatAction::Cancel.display(), ActionDisplay::Clear);
        assert_eq!(ChatAction::Other.display(), ActionDisplay::Ignore);
    }
}
