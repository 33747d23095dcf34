//! Crossterm key event normalization.
//!
//! Converts crossterm [`KeyEvent`]s into the [`KeyStroke`] tokens consumed by
//! the command grammar: unmodified keys become their literal character,
//! control and alt chords become `<C-x>` / `<A-x>`, named keys become
//! `<Name>`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::grammar::KeyStroke;

/// Convert a crossterm key event to a grammar keystroke.
///
/// Returns `None` for releases and for keys that never take part in a
/// command (bare modifiers, media keys, lock keys).
pub fn key_stroke(event: &KeyEvent) -> Option<KeyStroke> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    if event.code == KeyCode::Esc {
        return Some(KeyStroke::Escape);
    }

    let name = key_name(event.code)?;
    let token = if event.modifiers.contains(KeyModifiers::CONTROL) {
        format!("<C-{}>", name.to_lowercase())
    } else if event.modifiers.contains(KeyModifiers::ALT) {
        format!("<A-{}>", name.to_lowercase())
    } else if name.chars().count() == 1 {
        name
    } else {
        format!("<{name}>")
    };
    Some(KeyStroke::Key(token))
}

fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::F(n) => return Some(format!("F{n}")),
        KeyCode::Up => "Up",
        KeyCode::Down => "Down",
        KeyCode::Left => "Left",
        KeyCode::Right => "Right",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Insert => "Insert",
        KeyCode::Delete => "Delete",
        KeyCode::Backspace => "Backspace",
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        KeyCode::BackTab => "BackTab",
        _ => return None,
    };
    Some(name.to_string())
}
