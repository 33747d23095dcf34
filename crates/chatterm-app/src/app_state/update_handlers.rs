//! Backend update handlers.
//!
//! Each handler receives the update it was registered for and returns
//! whether the visible frame may have changed. Updates about chats or users
//! the model has not seen yet are dropped.

use chatterm_backend::{
    sanitize, ActionDisplay, AuthorizationState, ChatList, ChatPosition, NotificationScope,
    Update, UpdateKind,
};
use chatterm_common::{ids, ChatId, Router};
use chatterm_model::{Chat, ListRef, Message, User};

use super::core::AppState;

pub(super) fn router() -> Router<AppState, Update> {
    let router = Router::new()
        .on(UpdateKind::AuthorizationState, on_authorization_state)
        .on(UpdateKind::NewChat, on_new_chat)
        .on(UpdateKind::ChatPosition, on_chat_position)
        .on(UpdateKind::ChatLastMessage, on_chat_last_message)
        .on(UpdateKind::ChatReadInbox, on_chat_read_inbox)
        .on(UpdateKind::ChatNotificationSettings, on_chat_notification_settings)
        .on(UpdateKind::ScopeNotificationSettings, on_scope_notification_settings)
        .on(UpdateKind::ChatFolders, on_chat_folders)
        .on(UpdateKind::ChatAction, on_chat_action)
        .on(UpdateKind::UserStatus, on_user_status)
        .on(UpdateKind::User, on_user);

    UpdateKind::IGNORED
        .into_iter()
        .fold(router, |router, kind| router.ignore(kind))
}

fn list_ref(list: ChatList) -> ListRef {
    match list {
        ChatList::Main => ListRef::Main,
        ChatList::Archive => ListRef::Archive,
        ChatList::Folder { folder_id } => ListRef::Folder(folder_id),
    }
}

fn on_authorization_state(state: &mut AppState, update: &Update) -> bool {
    let Update::AuthorizationState {
        authorization_state,
    } = update
    else {
        return false;
    };
    tracing::info!(state = ?authorization_state, "authorization state changed");
    if *authorization_state == AuthorizationState::Closed {
        state.should_exit = true;
    }
    state.authorization = authorization_state.clone();
    false
}

fn on_new_chat(state: &mut AppState, update: &Update) -> bool {
    let Update::NewChat { chat: info } = update else {
        return false;
    };
    let mut chat = Chat::new(info.id, sanitize(&info.title));
    chat.unread_count = info.unread_count;
    chat.muted = !ids::is_private_chat(info.id) && state.settings.get().mute_channels_by_default;

    state.model.add_chat(chat) && state.model.is_chat_visible(info.id)
}

/// Apply one position and report whether the selected folder's window was
/// affected.
fn apply_position(state: &mut AppState, chat_id: ChatId, position: &ChatPosition) -> bool {
    let was_visible = state.model.is_chat_visible(chat_id);
    let Some(change) = state
        .model
        .set_chat_position(chat_id, list_ref(position.list), position.order)
    else {
        return false;
    };
    change.folder_index == state.model.selected_folder_index() && (was_visible || change.visible)
}

fn on_chat_position(state: &mut AppState, update: &Update) -> bool {
    let Update::ChatPosition { chat_id, position } = update else {
        return false;
    };
    apply_position(state, *chat_id, position)
}

fn on_chat_last_message(state: &mut AppState, update: &Update) -> bool {
    let Update::ChatLastMessage {
        chat_id,
        last_message,
        positions,
    } = update
    else {
        return false;
    };
    let Some(last) = last_message else {
        return false;
    };

    let message = Message::new(last.id, last.content.display_text());
    if !state.model.set_last_message(*chat_id, Some(message)) {
        return false;
    }
    let mut visible = state.model.is_chat_visible(*chat_id);
    for position in positions {
        visible |= apply_position(state, *chat_id, position);
    }
    visible
}

fn on_chat_read_inbox(state: &mut AppState, update: &Update) -> bool {
    let Update::ChatReadInbox {
        chat_id,
        unread_count,
    } = update
    else {
        return false;
    };
    let before = unread_summary(state, *chat_id);
    state.model.set_unread_count(*chat_id, *unread_count)
        && (state.model.is_chat_visible(*chat_id) || unread_summary(state, *chat_id) != before)
}

fn on_chat_notification_settings(state: &mut AppState, update: &Update) -> bool {
    let Update::ChatNotificationSettings {
        chat_id,
        notification_settings,
    } = update
    else {
        return false;
    };
    if notification_settings.use_default_mute_for {
        return false;
    }
    let before = unread_summary(state, *chat_id);
    state
        .model
        .set_muted(*chat_id, notification_settings.is_muted())
        && (state.model.is_chat_visible(*chat_id) || unread_summary(state, *chat_id) != before)
}

/// What a chat contributes to its folders' tab counters: unread, and if so
/// whether it is muted.
fn unread_summary(state: &AppState, chat_id: ChatId) -> Option<bool> {
    state
        .model
        .chat(chat_id)
        .filter(|chat| chat.unread_count > 0)
        .map(|chat| chat.muted)
}

fn on_scope_notification_settings(state: &mut AppState, update: &Update) -> bool {
    let Update::ScopeNotificationSettings {
        scope,
        notification_settings,
    } = update
    else {
        return false;
    };
    match scope {
        NotificationScope::GroupChats | NotificationScope::ChannelChats => {
            let muted = notification_settings.is_muted();
            state
                .settings
                .update(|settings| settings.mute_channels_by_default = muted);
        }
        NotificationScope::PrivateChats => {}
    }
    false
}

fn on_chat_folders(state: &mut AppState, update: &Update) -> bool {
    let Update::ChatFolders { chat_folders } = update else {
        return false;
    };
    for folder in chat_folders {
        state
            .model
            .get_or_create_folder(folder.id, &sanitize(&folder.title));
    }
    true
}

fn on_chat_action(state: &mut AppState, update: &Update) -> bool {
    let Update::ChatAction {
        chat_id,
        sender_id,
        action,
    } = update
    else {
        return false;
    };

    let text = match action.display() {
        ActionDisplay::Ignore => return false,
        ActionDisplay::Clear => None,
        ActionDisplay::Show(label) if ids::is_private_chat(*chat_id) => Some(label.to_string()),
        ActionDisplay::Show(label) => match state.model.user(sender_id.id()) {
            Some(sender) => Some(format!("{} is {}", sender.first_name, label.to_lowercase())),
            None => return false,
        },
    };

    state.model.set_chat_action(*chat_id, text) && state.model.is_chat_visible(*chat_id)
}

fn on_user_status(state: &mut AppState, update: &Update) -> bool {
    let Update::UserStatus { user_id, status } = update else {
        return false;
    };
    state.model.set_user_online(*user_id, status.is_online())
        && state.model.is_chat_visible(*user_id)
}

fn on_user(state: &mut AppState, update: &Update) -> bool {
    let Update::User { user } = update else {
        return false;
    };
    state.model.get_or_create_user(User::new(
        user.id,
        user.first_name.as_str(),
        user.last_name.as_str(),
        user.username.clone(),
    ));
    false
}
