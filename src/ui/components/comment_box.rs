//! Free-text comment input.

use crate::ui::components::common::create_input_block;
use crate::ui::core::{Action, Component};
use crate::utils::color::ACCENT;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub struct CommentBox {
    pub input_buffer: String,
    /// Cursor position in characters, not bytes
    pub cursor_position: usize,
    pub focused: bool,
    pub enabled: bool,
    pub prompt: String,
    pub placeholder: String,
}

impl CommentBox {
    pub fn new(prompt: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            input_buffer: String::new(),
            cursor_position: 0,
            focused: false,
            enabled: true,
            prompt: prompt.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Replace the contents, moving the cursor to the end
    pub fn set_text(&mut self, text: &str) {
        if self.input_buffer != text {
            self.input_buffer = text.to_string();
            self.cursor_position = self.input_buffer.chars().count();
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.input_buffer
    }

    fn byte_position(&self, char_index: usize) -> usize {
        self.input_buffer
            .chars()
            .take(char_index)
            .map(char::len_utf8)
            .sum()
    }

    fn insert_char(&mut self, c: char) -> Action {
        let byte_pos = self.byte_position(self.cursor_position);
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
        Action::UpdateComment(self.input_buffer.clone())
    }

    fn backspace(&mut self) -> Action {
        if self.cursor_position == 0 {
            return Action::None;
        }
        let byte_pos = self.byte_position(self.cursor_position - 1);
        self.input_buffer.remove(byte_pos);
        self.cursor_position -= 1;
        Action::UpdateComment(self.input_buffer.clone())
    }

    fn delete(&mut self) -> Action {
        if self.cursor_position >= self.input_buffer.chars().count() {
            return Action::None;
        }
        let byte_pos = self.byte_position(self.cursor_position);
        self.input_buffer.remove(byte_pos);
        Action::UpdateComment(self.input_buffer.clone())
    }

    /// Row and column of the cursor inside an unwrapped view of the text
    fn cursor_row_col(&self) -> (u16, u16) {
        let before: String = self.input_buffer.chars().take(self.cursor_position).collect();
        let row = before.matches('\n').count();
        let col = before.rsplit('\n').next().map_or(0, |line| line.chars().count());
        (
            u16::try_from(row).unwrap_or(u16::MAX),
            u16::try_from(col).unwrap_or(u16::MAX),
        )
    }
}

impl Component for CommentBox {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.enabled {
            return Action::None;
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.insert_char(c),
            KeyCode::Enter => self.insert_char('\n'),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                let char_count = self.input_buffer.chars().count();
                if self.cursor_position < char_count {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(rect);

        let prompt = Paragraph::new(Line::from(Span::styled(
            self.prompt.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(prompt, rows[0]);

        let block = create_input_block(self.focused, ACCENT);
        let inner = block.inner(rows[1]);
        let body = if self.input_buffer.is_empty() {
            Paragraph::new(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Paragraph::new(self.input_buffer.as_str()).style(Style::default().fg(Color::White))
        };
        f.render_widget(body.wrap(Wrap { trim: false }).block(block), rows[1]);

        if self.focused && self.enabled {
            let (row, col) = self.cursor_row_col();
            if row < inner.height && col < inner.width {
                f.set_cursor_position((inner.x + col, inner.y + row));
            }
        }
    }
}
