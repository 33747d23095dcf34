use chatterm_common::Command;

use super::*;

fn listener() -> CommandListener {
    CommandListener::new(CommandTable::default_table().unwrap())
}

fn feed_all(listener: &mut CommandListener, keys: &[&str]) -> Vec<KeyOutcome> {
    keys.iter().map(|k| listener.feed(KeyStroke::key(*k))).collect()
}

#[test]
fn default_table_builds() {
    let table = CommandTable::default_table().unwrap();
    assert_eq!(table.entries().len(), 12);
}

#[test]
fn single_key_commands() {
    let cases = [
        ("q", Command::Quit),
        ("j", Command::MoveDown),
        ("k", Command::MoveUp),
        ("G", Command::MoveToBottom),
        ("R", Command::LoadChats),
        ("l", Command::LoadMessages),
    ];
    for (key, expected) in cases {
        let mut l = listener();
        let outcome = l.feed(KeyStroke::key(key));
        assert_eq!(outcome.command, Some(expected), "key {key}");
        assert_eq!(outcome.pending, "");
    }
}

#[test]
fn gg_is_move_to_top() {
    let mut l = listener();
    let outcomes = feed_all(&mut l, &["g", "g"]);
    assert_eq!(outcomes[0].command, None);
    assert_eq!(outcomes[0].pending, "g");
    assert_eq!(outcomes[1].command, Some(Command::MoveToTop));
    assert_eq!(l.pending(), "");
}

#[test]
fn folder_navigation_literals() {
    let mut l = listener();
    assert_eq!(feed_all(&mut l, &["g", "t"])[1].command, Some(Command::NextFolder));
    assert_eq!(feed_all(&mut l, &["g", "T"])[1].command, Some(Command::PreviousFolder));
}

#[test]
fn g5t_selects_folder_five() {
    let mut l = listener();
    let outcomes = feed_all(&mut l, &["g", "5", "t"]);
    assert_eq!(outcomes[1].pending, "g5");
    assert_eq!(outcomes[1].command, None);
    assert_eq!(outcomes[2].command, Some(Command::SelectFolder(5)));
    assert_eq!(outcomes[2].pending, "");
}

#[test]
fn g_dollar_t_selects_last_folder() {
    let mut l = listener();
    let outcomes = feed_all(&mut l, &["g", "$", "t"]);
    assert_eq!(outcomes[2].command, Some(Command::LastFolder));
}

#[test]
fn invalid_input_resets_buffer() {
    let mut l = listener();
    let outcome = l.feed(KeyStroke::key("x"));
    assert_eq!(outcome.command, None);
    assert_eq!(outcome.pending, "");
    assert_eq!(l.pending(), "");
}

#[test]
fn invalid_continuation_resets_buffer() {
    let mut l = listener();
    let outcomes = feed_all(&mut l, &["g", "5", "x"]);
    assert_eq!(outcomes[2].command, None);
    assert_eq!(l.pending(), "");

    // Buffer starts fresh afterwards.
    assert_eq!(l.feed(KeyStroke::key("j")).command, Some(Command::MoveDown));
}

#[test]
fn escape_clears_pending_input() {
    let mut l = listener();
    l.feed(KeyStroke::key("g"));
    assert_eq!(l.pending(), "g");

    let outcome = l.feed(KeyStroke::Escape);
    assert_eq!(outcome, KeyOutcome { pending: String::new(), command: None });
    assert_eq!(l.feed(KeyStroke::key("k")).command, Some(Command::MoveUp));
}

#[test]
fn window_chord_moves_separator() {
    let mut l = listener();
    let outcome = l.feed(KeyStroke::key("<C-w>"));
    assert_eq!(outcome.command, None);
    assert_eq!(outcome.pending, "<C-w>");
    assert_eq!(l.feed(KeyStroke::key("l")).command, Some(Command::MoveSeparatorRight));
    assert_eq!(l.pending(), "");

    let outcomes = feed_all(&mut l, &["<C-w>", "h"]);
    assert_eq!(outcomes[1].command, Some(Command::MoveSeparatorLeft));
}

#[test]
fn unknown_chord_follow_up_resets() {
    let mut l = listener();
    let outcomes = feed_all(&mut l, &["<C-w>", "x"]);
    assert_eq!(outcomes[1], KeyOutcome { pending: String::new(), command: None });
    assert_eq!(l.feed(KeyStroke::key("l")).command, Some(Command::LoadMessages));
}

#[test]
fn custom_table_with_chord_prefix() {
    let table = CommandTable::new(vec![
        CommandEntry::literal("<C-w>q", Command::Quit).unwrap(),
        CommandEntry::literal("<C-w>j", Command::MoveDown).unwrap(),
    ]);
    let mut l = CommandListener::new(table);
    assert_eq!(l.feed(KeyStroke::key("<C-w>")).pending, "<C-w>");
    assert_eq!(l.feed(KeyStroke::key("j")).command, Some(Command::MoveDown));
}

#[test]
fn empty_literal_is_rejected() {
    assert!(CommandEntry::literal("", Command::Quit).is_err());
}

#[test]
fn resolve_requires_exact_match() {
    let table = CommandTable::default_table().unwrap();
    let matched: Vec<_> = table.entries().iter().filter_map(|e| e.resolve("g7t")).collect();
    assert_eq!(matched, vec![Command::SelectFolder(7)]);
    assert!(table.entries().iter().all(|e| e.resolve("g").is_none()));
}
