//! Confirmation card shown once a response has been submitted.

use crate::constants::{BUTTON_SEND_ANOTHER, THANK_YOU_MESSAGE, THANK_YOU_REFERENCE, THANK_YOU_TITLE};
use crate::icons::IconService;
use crate::survey::SubmissionReceipt;
use crate::ui::core::{Action, Component};
use crate::utils::color::ACCENT;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Default)]
pub struct ThankYouComponent {
    pub receipt: Option<SubmissionReceipt>,
    pub icons: IconService,
}

impl ThankYouComponent {
    pub fn new(icons: IconService) -> Self {
        Self { receipt: None, icons }
    }

    pub fn set_receipt(&mut self, receipt: Option<SubmissionReceipt>) {
        self.receipt = receipt;
    }
}

impl Component for ThankYouComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => Action::Reset,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                format!("{} {}", self.icons.success(), THANK_YOU_TITLE),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(THANK_YOU_MESSAGE, Style::default().fg(Color::White))),
        ];

        if let Some(receipt) = &self.receipt {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", THANK_YOU_REFERENCE), Style::default().fg(Color::Gray)),
                Span::styled(
                    receipt.reference(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", BUTTON_SEND_ANOTHER),
            Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
        )));

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
    }
}
