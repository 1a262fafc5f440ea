//! Scrollable overlay showing the in-memory log buffer.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const PAGE_SIZE: usize = 10;

pub struct LogsDialog {
    logger: Logger,
    pub scroll_offset: usize,
    scrollbar_state: ScrollbarState,
}

impl LogsDialog {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_down(&mut self, lines: usize) {
        // Clamped against the content height at render time
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }
}

impl Component for LogsDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::F(2) => Action::ShowLogs(false),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down(1);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_up(PAGE_SIZE);
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_down(PAGE_SIZE);
                Action::None
            }
            KeyCode::Home => {
                self.reset_scroll();
                Action::None
            }
            KeyCode::End => {
                self.scroll_offset = usize::MAX;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let logs_area = LayoutManager::centered_rect(90, 90, area);
        f.render_widget(Clear, logs_area);

        let logs = self.logger.get_logs();
        let logs_content = if logs.is_empty() {
            "No logs yet".to_string()
        } else {
            logs.join("\n")
        };

        let lines: Vec<&str> = logs_content.lines().collect();
        let total_lines = lines.len();
        let visible_height = logs_area.height.saturating_sub(2) as usize;

        let max_scroll = total_lines.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.scroll_offset);

        let visible_text = lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");

        let paragraph = Paragraph::new(visible_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(DIALOG_TITLE_LOGS)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(paragraph, logs_area);

        if total_lines > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("▐")
                .style(Style::default().fg(Color::Gray))
                .thumb_style(Style::default().fg(Color::White));
            f.render_stateful_widget(scrollbar, logs_area, &mut self.scrollbar_state);
        }
    }
}
