use chatterm_model::{Folder, Model};

use super::types::{ChatView, FolderView, Frame, MessageView, UserView};

impl Frame {
    /// Project the model's visible state.
    pub fn project(model: &Model, command_input: &str, separator_offset: i32) -> Frame {
        let chats: Vec<ChatView> = model.visible_chats().into_iter().map(ChatView::from).collect();

        let users = chats
            .iter()
            .filter_map(|chat| model.user(chat.id))
            .map(|user| (user.id, UserView::from(user)))
            .collect();

        Frame {
            folders: model
                .folders()
                .iter()
                .map(|folder| folder_view(model, folder))
                .collect(),
            messages: model.visible_messages().iter().map(MessageView::from).collect(),
            users,
            selected_folder_index: model.selected_folder_index(),
            selected_chat: model.selected_chat().map(ChatView::from),
            selected_chat_index: model.relative_selected_index(),
            command_input: command_input.to_string(),
            separator_offset,
            chats,
        }
    }
}

fn folder_view(model: &Model, folder: &Folder) -> FolderView {
    let unread: Vec<_> = model
        .sorted_chats_of(folder)
        .filter(|chat| chat.unread_count > 0)
        .collect();

    FolderView {
        id: folder.id(),
        title: folder.title().to_string(),
        selected_chat_index: folder.selected_chat_index(),
        selected_chat: folder
            .selected_chat_id()
            .and_then(|id| model.chat(id))
            .map(ChatView::from),
        unread_chats_count: unread.len(),
        has_unmuted_unread_chat: unread.iter().any(|chat| !chat.muted),
    }
}

#[cfg(test)]
mod tests {
    use chatterm_model::{Chat, ListRef, Message, User, Viewport};

    use super::*;

    fn model() -> Model {
        let mut model = Model::new(Viewport::new(2, 3));
        for id in [1, -2, 3] {
            model.add_chat(Chat::new(id, format!("chat {id}")));
            model.set_chat_position(id, ListRef::Main, 10 - id);
        }
        model
    }

    #[test]
    fn empty_model_projects_one_folder() {
        let model = Model::new(Viewport::new(3, 6));
        let frame = Frame::project(&model, "", 0);
        assert_eq!(frame.folders.len(), 1);
        assert_eq!(frame.folders[0].title, "All chats");
        assert!(frame.chats.is_empty());
        assert!(frame.selected_chat.is_none());
    }

    #[test]
    fn chats_limited_to_window() {
        let frame = Frame::project(&model(), "g", 2);
        let ids: Vec<_> = frame.chats.iter().map(|c| c.id).collect();
        // -2 has key 12, 1 has key 9, 3 has key 7
        assert_eq!(ids, vec![-2, 1]);
        assert_eq!(frame.selected_chat.as_ref().unwrap().id, -2);
        assert_eq!(frame.command_input, "g");
        assert_eq!(frame.separator_offset, 2);
    }

    #[test]
    fn selected_index_is_relative_to_window() {
        let mut model = model();
        model.select_chat_at(2);
        let frame = Frame::project(&model, "", 0);
        assert_eq!(frame.selected_chat_index, 1);
        assert_eq!(frame.folders[0].selected_chat_index, 2);
        assert_eq!(frame.chats[1].id, 3);
    }

    #[test]
    fn folder_unread_summary() {
        let mut model = model();
        model.set_unread_count(1, 4);
        model.set_unread_count(3, 1);
        model.set_muted(1, true);
        model.set_muted(3, true);
        let frame = Frame::project(&model, "", 0);
        assert_eq!(frame.folders[0].unread_chats_count, 2);
        assert!(!frame.folders[0].has_unmuted_unread_chat);

        model.set_muted(3, false);
        let frame = Frame::project(&model, "", 0);
        assert!(frame.folders[0].has_unmuted_unread_chat);
    }

    #[test]
    fn users_follow_visible_private_chats() {
        let mut model = model();
        model.get_or_create_user(User::new(1, "Ann", "", None));
        model.get_or_create_user(User::new(3, "Bo", "", None));
        model.set_user_online(1, true);
        let frame = Frame::project(&model, "", 0);
        assert_eq!(frame.users.len(), 1);
        assert!(frame.users[&1].online);
    }

    #[test]
    fn messages_and_preview() {
        let mut model = model();
        model.set_last_message(-2, Some(Message::new(5, "latest")));
        model.seed_history(-2);
        let frame = Frame::project(&model, "", 0);
        assert_eq!(frame.messages, vec![MessageView { id: 5, text: "latest".into() }]);
        assert_eq!(frame.chats[0].preview(), "latest");

        model.set_chat_action(-2, Some("Typing...".into()));
        let frame = Frame::project(&model, "", 0);
        assert_eq!(frame.chats[0].preview(), "Typing...");
    }
}
