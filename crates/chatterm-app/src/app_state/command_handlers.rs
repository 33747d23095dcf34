//! Command handlers. Same contract as the update handlers: mutate the
//! state, return whether the frame may have changed.

use chatterm_common::{Command, CommandKind, Router};
use chatterm_renderer::Layout;

use super::core::AppState;
use super::effects::Effect;

pub(super) fn router() -> Router<AppState, Command> {
    let router: Router<AppState, Command> = Router::new();
    router
        .on(CommandKind::Quit, quit)
        .on(CommandKind::MoveUp, |s, _| s.model.move_selection(-1))
        .on(CommandKind::MoveDown, |s, _| s.model.move_selection(1))
        .on(CommandKind::MoveToTop, |s, _| s.model.select_first_chat())
        .on(CommandKind::MoveToBottom, |s, _| s.model.select_last_chat())
        .on(CommandKind::NextFolder, |s, _| s.model.next_folder())
        .on(CommandKind::PreviousFolder, |s, _| s.model.previous_folder())
        .on(CommandKind::SelectFolder, select_folder)
        .on(CommandKind::LastFolder, |s, _| s.model.select_last_folder())
        .on(CommandKind::MoveSeparatorLeft, |s, _| move_separator(s, -1))
        .on(CommandKind::MoveSeparatorRight, |s, _| move_separator(s, 1))
        .on(CommandKind::LoadChats, load_chats)
        .on(CommandKind::LoadMessages, load_messages)
}

fn quit(state: &mut AppState, _: &Command) -> bool {
    tracing::info!("quit requested");
    state.should_exit = true;
    false
}

fn select_folder(state: &mut AppState, command: &Command) -> bool {
    let Command::SelectFolder(number) = command else {
        return false;
    };
    state.model.select_folder_number(*number)
}

/// Shift the separator, stopping where the layout stops moving it.
fn move_separator(state: &mut AppState, delta: i32) -> bool {
    let (min, max) = Layout::separator_bounds(state.columns);
    state.settings.update(|settings| {
        settings.separator_offset = settings
            .separator_offset
            .saturating_add(delta)
            .clamp(min, max);
    })
}

fn load_chats(state: &mut AppState, _: &Command) -> bool {
    let folder_id = state.model.selected_folder().id();
    state.effects.push(Effect::LoadChats { folder_id });
    false
}

fn load_messages(state: &mut AppState, _: &Command) -> bool {
    let Some(chat_id) = state.model.selected_chat().map(|chat| chat.id) else {
        return false;
    };
    let seeded = state.model.seed_history(chat_id);
    state.request_messages(chat_id);
    seeded
}
