//! One-line summaries of handled updates for the log.

use chatterm_backend::Update;
use chatterm_common::ChatId;
use chatterm_model::Model;

fn chat_name(model: &Model, chat_id: ChatId) -> String {
    match model.chat(chat_id) {
        Some(chat) => format!("'{}'", chat.title),
        None => format!("#{chat_id}"),
    }
}

pub fn summary(update: &Update, model: &Model) -> String {
    match update {
        Update::AuthorizationState {
            authorization_state,
        } => format!("authorization: {authorization_state:?}"),
        Update::NewChat { chat } => format!("new chat {}", chat_name(model, chat.id)),
        Update::ChatPosition { chat_id, position } => format!(
            "position of {} in {:?}: {}",
            chat_name(model, *chat_id),
            position.list,
            position.order
        ),
        Update::ChatLastMessage {
            chat_id, positions, ..
        } => format!(
            "last message of {} ({} positions)",
            chat_name(model, *chat_id),
            positions.len()
        ),
        Update::ChatReadInbox {
            chat_id,
            unread_count,
        } => format!("{} unread: {unread_count}", chat_name(model, *chat_id)),
        Update::ChatNotificationSettings {
            chat_id,
            notification_settings,
        } => format!(
            "notifications of {}: muted={}",
            chat_name(model, *chat_id),
            notification_settings.is_muted()
        ),
        Update::ScopeNotificationSettings {
            scope,
            notification_settings,
        } => format!(
            "scope {scope:?} notifications: muted={}",
            notification_settings.is_muted()
        ),
        Update::ChatFolders { chat_folders } => format!("{} chat folders", chat_folders.len()),
        Update::ChatAction {
            chat_id, action, ..
        } => format!("action in {}: {action:?}", chat_name(model, *chat_id)),
        Update::UserStatus { user_id, status } => format!("user #{user_id} status: {status:?}"),
        Update::User { user } => format!("user #{} '{}'", user.id, user.first_name),
        other => format!("{:?}", other.kind()),
    }
}

#[cfg(test)]
mod tests {
    use chatterm_backend::{ChatInfo, ChatList, ChatPosition};
    use chatterm_model::{Chat, Viewport};

    use super::*;

    #[test]
    fn names_known_chats_by_title() {
        let mut model = Model::new(Viewport::new(3, 6));
        model.add_chat(Chat::new(10, "Alice"));
        let update = Update::ChatPosition {
            chat_id: 10,
            position: ChatPosition {
                list: ChatList::Main,
                order: 5,
            },
        };
        assert_eq!(summary(&update, &model), "position of 'Alice' in Main: 5");
    }

    #[test]
    fn falls_back_to_chat_id() {
        let model = Model::new(Viewport::new(3, 6));
        let update = Update::NewChat {
            chat: ChatInfo {
                id: -7,
                title: "Club".into(),
                unread_count: 0,
            },
        };
        assert_eq!(summary(&update, &model), "new chat #-7");
    }

    #[test]
    fn ignored_kinds_print_their_kind() {
        let model = Model::new(Viewport::new(3, 6));
        assert_eq!(summary(&Update::NewMessage, &model), "NewMessage");
    }
}
