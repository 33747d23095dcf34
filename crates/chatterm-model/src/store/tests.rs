use chatterm_common::ALL_CHATS_FOLDER_ID;

use super::*;
use crate::chat::Message;
use crate::viewport::Viewport;

fn model() -> Model {
    Model::new(Viewport::new(5, 10))
}

fn sorted_ids(folder: &Folder) -> Vec<ChatId> {
    folder.sorted_chats().to_vec()
}

#[test]
fn new_model_has_all_chats_folder() {
    let model = model();
    assert_eq!(model.folders().len(), 1);
    assert_eq!(model.all_chats().id(), ALL_CHATS_FOLDER_ID);
    assert_eq!(model.all_chats().title(), ALL_CHATS_TITLE);
    assert_eq!(model.selected_folder_index(), 0);
    assert!(model.selected_chat().is_none());
}

#[test]
fn duplicate_new_chat_is_idempotent() {
    let mut model = model();
    assert!(model.add_chat(Chat::new(10, "Alice")));
    assert!(!model.add_chat(Chat::new(10, "Alice again")));
    assert_eq!(model.chat_count(), 1);
    assert_eq!(model.all_chats().len(), 1);
    assert_eq!(model.chat(10).unwrap().title, "Alice");
}

#[test]
fn new_chat_then_main_position() {
    let mut model = model();
    model.add_chat(Chat::new(10, "Alice"));
    assert_eq!(sorted_ids(model.all_chats()), vec![10]);

    let change = model.set_chat_position(10, ListRef::Main, 5).unwrap();
    assert_eq!(change.folder_index, 0);
    assert!(change.visible);
    assert_eq!(model.chat(10).unwrap().positions[&ALL_CHATS_FOLDER_ID], 5);
    assert_eq!(sorted_ids(model.all_chats()), vec![10]);
}

#[test]
fn position_update_reorders_descending() {
    let mut model = model();
    model.get_or_create_folder(7, "F");
    for (id, order) in [(100, 100), (50, 50)] {
        model.add_chat(Chat::new(id, "chat"));
        model.set_chat_position(id, ListRef::Folder(7), order);
    }
    let folder = model.folder(1).unwrap();
    assert_eq!(sorted_ids(folder), vec![100, 50]);

    model.set_chat_position(50, ListRef::Folder(7), 200);
    assert_eq!(sorted_ids(model.folder(1).unwrap()), vec![50, 100]);
}

#[test]
fn equal_keys_keep_insertion_order_across_resorts() {
    let mut model = model();
    for id in [3, 1, 2] {
        model.add_chat(Chat::new(id, "chat"));
    }
    for _ in 0..3 {
        for id in [2, 3, 1] {
            model.set_chat_position(id, ListRef::Main, 9);
        }
        assert_eq!(sorted_ids(model.all_chats()), vec![3, 1, 2]);
    }
}

#[test]
fn higher_keys_precede_after_any_update_sequence() {
    let mut model = model();
    for id in 1..=6 {
        model.add_chat(Chat::new(id, "chat"));
    }
    let updates = [(1, 5), (2, 9), (3, 1), (1, 12), (4, 9), (5, -3), (3, 20), (6, 0)];
    for (id, order) in updates {
        model.set_chat_position(id, ListRef::Main, order);
    }
    let keys: Vec<i64> = model
        .sorted_chats_of(model.all_chats())
        .map(|c| c.position_in(ALL_CHATS_FOLDER_ID))
        .collect();
    assert!(keys.windows(2).all(|w| w[0] >= w[1]), "keys not descending: {keys:?}");
    assert_eq!(sorted_ids(model.all_chats()), vec![3, 1, 2, 4, 6, 5]);
}

#[test]
fn custom_folder_reuses_canonical_chat() {
    let mut model = model();
    model.get_or_create_folder(3, "Work");
    model.add_chat(Chat::new(-20, "Team"));

    model.set_chat_position(-20, ListRef::Folder(3), 4).unwrap();
    model.set_unread_count(-20, 7);

    assert_eq!(model.chat_count(), 1);
    let work = model.folder(1).unwrap();
    assert!(work.contains(-20));
    let chat = model.sorted_chats_of(work).next().unwrap();
    assert_eq!(chat.unread_count, 7);
    assert_eq!(chat.position_in(3), 4);
    assert_eq!(chat.position_in(ALL_CHATS_FOLDER_ID), 0);
}

#[test]
fn archive_position_is_noop() {
    let mut model = model();
    model.add_chat(Chat::new(1, "a"));
    assert_eq!(model.set_chat_position(1, ListRef::Archive, 10), None);
    assert!(model.chat(1).unwrap().positions.is_empty());
}

#[test]
fn stale_references_are_noops() {
    let mut model = model();
    model.add_chat(Chat::new(1, "a"));

    assert_eq!(model.set_chat_position(2, ListRef::Main, 1), None);
    assert_eq!(model.set_chat_position(1, ListRef::Folder(99), 1), None);
    assert!(!model.set_unread_count(2, 1));
    assert!(!model.set_muted(2, true));
    assert!(!model.set_last_message(2, None));
    assert!(!model.set_chat_action(2, Some("Typing...".into())));
    assert!(!model.set_user_online(5, true));
    assert_eq!(model.chat_count(), 1);
}

#[test]
fn folders_are_idempotent() {
    let mut model = model();
    assert_eq!(model.get_or_create_folder(4, "Work"), 1);
    assert_eq!(model.get_or_create_folder(5, "Home"), 2);
    assert_eq!(model.get_or_create_folder(4, "Renamed"), 1);
    assert_eq!(model.folders().len(), 3);
    assert_eq!(model.folder(1).unwrap().title(), "Work");
}

#[test]
fn first_user_record_wins() {
    let mut model = model();
    assert!(model.get_or_create_user(User::new(7, "Ann", "Lee", None)));
    assert!(!model.get_or_create_user(User::new(7, "Annie", "", Some("annie".into()))));
    assert_eq!(model.user(7).unwrap().first_name, "Ann");

    assert!(model.set_user_online(7, true));
    assert!(model.user(7).unwrap().online);
}

#[test]
fn position_visibility_depends_on_window() {
    let mut model = Model::new(Viewport::new(2, 4));
    for id in 1..=4 {
        model.add_chat(Chat::new(id, "chat"));
        model.set_chat_position(id, ListRef::Main, 100 - id);
    }
    let change = model.set_chat_position(4, ListRef::Main, 1).unwrap();
    assert!(!change.visible);
    let change = model.set_chat_position(4, ListRef::Main, 1000).unwrap();
    assert!(change.visible);
}

#[test]
fn positions_in_unselected_folder_are_not_visible() {
    let mut model = model();
    model.get_or_create_folder(3, "Work");
    model.add_chat(Chat::new(1, "a"));
    let change = model.set_chat_position(1, ListRef::Folder(3), 1).unwrap();
    assert_eq!(change.folder_index, 1);
    assert!(!change.visible);
}

#[test]
fn history_seed_and_prepend() {
    let mut model = model();
    model.add_chat(Chat::new(1, "a"));
    assert!(!model.seed_history(1));

    model.set_last_message(1, Some(Message::new(10, "latest")));
    assert!(model.seed_history(1));
    assert!(!model.seed_history(1));

    let added = model.prepend_history(
        1,
        vec![Message::new(10, "latest"), Message::new(9, "b"), Message::new(8, "a")],
    );
    assert_eq!(added, 2);
    let ids: Vec<_> = model.chat(1).unwrap().messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![8, 9, 10]);
    assert_eq!(model.chat(1).unwrap().oldest_message_id(), Some(8));

    assert_eq!(model.prepend_history(2, vec![Message::new(1, "x")]), 0);
}

#[test]
fn chat_action_overwrite_and_clear() {
    let mut model = model();
    model.add_chat(Chat::new(1, "a"));
    model.set_chat_action(1, Some("Typing...".into()));
    assert_eq!(model.chat(1).unwrap().chat_action.as_deref(), Some("Typing..."));
    model.set_chat_action(1, None);
    assert_eq!(model.chat(1).unwrap().chat_action, None);
}
