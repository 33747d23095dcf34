use std::collections::BTreeSet;

use chatterm_common::PlatformError;

/// Placeholder marking the parameter slot in a template such as `g_t`.
pub const PARAMETER_PLACEHOLDER: char = '_';

/// A textual command pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandPattern {
    /// Fixed key sequence, e.g. `gg`.
    Literal(String),
    /// `head`, one character from `allowed`, then `tail`.
    Parameterized {
        head: String,
        tail: String,
        allowed: BTreeSet<char>,
    },
}

impl CommandPattern {
    pub fn literal(text: impl Into<String>) -> Self {
        CommandPattern::Literal(text.into())
    }

    /// Build a parameterized pattern from a template containing exactly one
    /// [`PARAMETER_PLACEHOLDER`].
    pub fn parameterized(template: &str, allowed: &str) -> Result<Self, PlatformError> {
        let invalid = |reason: &str| PlatformError::InvalidCommandPattern {
            pattern: template.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = template.split(PARAMETER_PLACEHOLDER).collect();
        let [head, tail] = parts.as_slice() else {
            return Err(invalid("template must contain exactly one placeholder"));
        };

        let allowed: BTreeSet<char> = allowed.chars().collect();
        if allowed.is_empty() {
            return Err(invalid("no allowed parameters"));
        }

        Ok(CommandPattern::Parameterized {
            head: head.to_string(),
            tail: tail.to_string(),
            allowed,
        })
    }

    /// Whether `input` is a prefix of some sequence this pattern accepts.
    pub fn could_complete(&self, input: &str) -> bool {
        match self {
            CommandPattern::Literal(text) => text.starts_with(input),
            CommandPattern::Parameterized {
                head,
                tail,
                allowed,
            } => {
                if head.starts_with(input) {
                    return true;
                }
                let Some(rest) = input.strip_prefix(head.as_str()) else {
                    return false;
                };
                let mut chars = rest.chars();
                match chars.next() {
                    Some(parameter) => {
                        allowed.contains(&parameter) && tail.starts_with(chars.as_str())
                    }
                    None => true,
                }
            }
        }
    }

    /// Exact match. `Some(None)` for a literal, `Some(Some(c))` carrying the
    /// parameter for a parameterized pattern.
    pub fn matches(&self, input: &str) -> Option<Option<char>> {
        match self {
            CommandPattern::Literal(text) => (text == input).then_some(None),
            CommandPattern::Parameterized {
                head,
                tail,
                allowed,
            } => {
                let rest = input.strip_prefix(head.as_str())?;
                let mut chars = rest.chars();
                let parameter = chars.next()?;
                (allowed.contains(&parameter) && chars.as_str() == tail)
                    .then_some(Some(parameter))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder_pattern() -> CommandPattern {
        CommandPattern::parameterized("g_t", "0123456789$").unwrap()
    }

    #[test]
    fn literal_prefix_and_match() {
        let pattern = CommandPattern::literal("gg");
        assert!(pattern.could_complete(""));
        assert!(pattern.could_complete("g"));
        assert!(pattern.could_complete("gg"));
        assert!(!pattern.could_complete("ggg"));
        assert!(!pattern.could_complete("x"));
        assert_eq!(pattern.matches("gg"), Some(None));
        assert_eq!(pattern.matches("g"), None);
    }

    #[test]
    fn parameterized_splits_template() {
        match folder_pattern() {
            CommandPattern::Parameterized { head, tail, allowed } => {
                assert_eq!(head, "g");
                assert_eq!(tail, "t");
                assert!(allowed.contains(&'$'));
                assert_eq!(allowed.len(), 11);
            }
            other => panic!("unexpected pattern {other:?}"),
        }
    }

    #[test]
    fn parameterized_prefixes() {
        let pattern = folder_pattern();
        assert!(pattern.could_complete("g"));
        assert!(pattern.could_complete("g5"));
        assert!(pattern.could_complete("g5t"));
        assert!(pattern.could_complete("g$"));
        assert!(!pattern.could_complete("gx"));
        assert!(!pattern.could_complete("g5x"));
        assert!(!pattern.could_complete("g5tt"));
        assert!(!pattern.could_complete("k"));
    }

    #[test]
    fn parameterized_match_extracts_parameter() {
        let pattern = folder_pattern();
        assert_eq!(pattern.matches("g5t"), Some(Some('5')));
        assert_eq!(pattern.matches("g$t"), Some(Some('$')));
        assert_eq!(pattern.matches("g5"), None);
        assert_eq!(pattern.matches("gt"), None);
        assert_eq!(pattern.matches("gxt"), None);
    }

    #[test]
    fn multi_character_head_and_tail() {
        let pattern = CommandPattern::parameterized("<C-w>_ab", "hjkl").unwrap();
        assert!(pattern.could_complete("<C-"));
        assert!(pattern.could_complete("<C-w>h"));
        assert!(pattern.could_complete("<C-w>ha"));
        assert!(!pattern.could_complete("<C-w>x"));
        assert_eq!(pattern.matches("<C-w>lab"), Some(Some('l')));
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let err = CommandPattern::parameterized("gt", "0123").unwrap_err();
        assert!(matches!(err, PlatformError::InvalidCommandPattern { .. }));
    }

    #[test]
    fn template_with_two_placeholders_is_rejected() {
        assert!(CommandPattern::parameterized("g__t", "0123").is_err());
    }

    #[test]
    fn empty_parameter_set_is_rejected() {
        let err = CommandPattern::parameterized("g_t", "").unwrap_err();
        assert!(err.to_string().contains("no allowed parameters"));
    }
}
