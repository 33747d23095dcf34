//! Paints frame diffs onto a terminal with crossterm.

mod layout;

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::diff::FrameDiff;
use crate::frame::{ChatView, Frame};
use crate::sink::RenderSink;

pub use layout::{fit, Layout};
use layout::{BODY_TOP, RULE_ROW, TABS_ROW};

const SELECTED_MARKER: &str = "> ";
const ONLINE_MARKER: char = '+';

/// Repaints only the screen regions a diff touches.
pub struct TerminalRenderer<W: Write> {
    out: W,
    columns: u16,
    rows: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, columns: u16, rows: u16) -> Self {
        Self { out, columns, rows }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint_tabs(&mut self, frame: &Frame) -> std::io::Result<()> {
        let tabs: Vec<String> = frame
            .folders
            .iter()
            .enumerate()
            .map(|(index, folder)| {
                let mut label = folder.title.clone();
                if folder.unread_chats_count > 0 {
                    label.push_str(&format!(" ({})", folder.unread_chats_count));
                    if folder.has_unmuted_unread_chat {
                        label.push('*');
                    }
                }
                if index == frame.selected_folder_index {
                    format!("[{label}]")
                } else {
                    format!(" {label} ")
                }
            })
            .collect();

        queue!(
            self.out,
            MoveTo(0, TABS_ROW),
            Print(fit(&tabs.join(" "), self.columns)),
            MoveTo(0, RULE_ROW),
            Print("-".repeat(usize::from(self.columns)))
        )
    }

    fn chat_line(frame: &Frame, row: usize, chat: &ChatView) -> String {
        let marker = if row == frame.selected_chat_index {
            SELECTED_MARKER
        } else {
            "  "
        };
        let mut line = String::from(marker);
        if chat.is_private() && frame.users.get(&chat.id).is_some_and(|u| u.online) {
            line.push(ONLINE_MARKER);
        }
        line.push_str(&chat.title);
        if chat.muted {
            line.push_str(" [m]");
        }
        if chat.unread_count > 0 {
            line.push_str(&format!(" ({})", chat.unread_count));
        }
        line
    }

    fn paint_chat_list(&mut self, frame: &Frame, layout: &Layout) -> std::io::Result<()> {
        for offset in 0..layout.body_rows() {
            let row = usize::from(offset);
            let text = match frame.chats.get(row / 2) {
                Some(chat) if row % 2 == 0 => Self::chat_line(frame, row / 2, chat),
                Some(chat) => format!("    {}", chat.preview()),
                None => String::new(),
            };
            queue!(
                self.out,
                MoveTo(0, BODY_TOP + offset),
                Print(fit(&text, layout.list_width)),
                MoveTo(layout.separator_column(), BODY_TOP + offset),
                Print('|')
            )?;
        }
        Ok(())
    }

    fn paint_messages(&mut self, frame: &Frame, layout: &Layout) -> std::io::Result<()> {
        let width = layout.message_width();
        if width == 0 || layout.body_rows() == 0 {
            return Ok(());
        }
        let column = layout.message_column();
        let title = frame
            .selected_chat
            .as_ref()
            .map(|chat| chat.title.as_str())
            .unwrap_or("");
        queue!(self.out, MoveTo(column, BODY_TOP), Print(fit(title, width)))?;

        let capacity = usize::from(layout.body_rows() - 1);
        let skip = frame.messages.len().saturating_sub(capacity);
        let mut lines = frame.messages[skip..].iter().map(|m| m.text.as_str());
        for offset in 1..layout.body_rows() {
            let text = lines.next().unwrap_or("");
            queue!(
                self.out,
                MoveTo(column, BODY_TOP + offset),
                Print(fit(text, width))
            )?;
        }
        Ok(())
    }

    fn paint_command(&mut self, frame: &Frame, layout: &Layout) -> std::io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, layout.command_row()),
            Print(fit(&frame.command_input, self.columns))
        )
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn render(&mut self, diff: &FrameDiff, frame: &Frame) -> std::io::Result<()> {
        if !diff.is_changed() || self.rows == 0 {
            return Ok(());
        }
        let layout = Layout::new(self.columns, self.rows, frame.separator_offset);

        if diff.touches_tabs() {
            self.paint_tabs(frame)?;
        }
        if diff.touches_chat_list() {
            self.paint_chat_list(frame, &layout)?;
        }
        if diff.touches_messages() {
            self.paint_messages(frame, &layout)?;
        }
        if diff.command_input.is_some() {
            self.paint_command(frame, &layout)?;
        }
        tracing::trace!(
            tabs = diff.touches_tabs(),
            chats = diff.touches_chat_list(),
            messages = diff.touches_messages(),
            "Painted frame diff"
        );
        self.out.flush()
    }

    fn resize(&mut self, columns: u16, rows: u16) -> std::io::Result<()> {
        self.columns = columns;
        self.rows = rows;
        queue!(self.out, Clear(ClearType::All))
    }
}
