//! Score scale component: a row of selectable score cells with hover preview.
//!
//! The committed score is owned by the survey form and pushed in through
//! [`ScoreScaleComponent::set_value`] on every update. The component only keeps
//! the preview (keyboard cursor or mouse hover) and reports commits as
//! [`Action::CommitScore`].

use crate::constants::SCALE_PROMPT;
use crate::icons::IconService;
use crate::survey::{Scale, Score, ScoreChanged, ScoreSelector};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::color::{band_color, band_foreground};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct ScoreScaleComponent {
    pub selector: ScoreSelector,
    pub value: Option<Score>,
    pub focused: bool,
    pub enabled: bool,
    pub icons: IconService,
    pub low_anchor: String,
    pub high_anchor: String,
    /// Hit areas from the last render, used for mouse hover and clicks
    cells: Vec<(Score, Rect)>,
}

impl ScoreScaleComponent {
    pub fn new(scale: Scale, low_anchor: impl Into<String>, high_anchor: impl Into<String>) -> Self {
        Self {
            selector: ScoreSelector::new(scale),
            value: None,
            focused: true,
            enabled: true,
            icons: IconService::default(),
            low_anchor: low_anchor.into(),
            high_anchor: high_anchor.into(),
            cells: Vec::new(),
        }
    }

    pub fn set_value(&mut self, value: Option<Score>) {
        self.value = value;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.selector.set_hover_preview(None);
        }
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    #[must_use]
    pub fn hovered(&self) -> Option<Score> {
        self.selector.hovered()
    }

    /// Hovered score if any, else the committed one
    #[must_use]
    pub fn display_score(&self) -> Option<Score> {
        self.selector.display_score(self.value)
    }

    /// Score under a terminal cell, if any
    #[must_use]
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Score> {
        let position = Position::new(column, row);
        self.cells
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(score, _)| *score)
    }

    /// Move the preview one step, starting from the committed value
    fn step_preview(&mut self, forward: bool) {
        let scale = self.selector.scale();
        let next = match self.selector.hovered().or(self.value) {
            Some(current) if forward => scale.next(current),
            Some(current) => scale.previous(current),
            None if forward => Score::new(scale.min()),
            None => Score::new(scale.max()),
        };
        self.selector.set_hover_preview(Some(next));
    }

    fn commit(&self, candidate: Score) -> Action {
        match self.selector.commit(candidate) {
            Ok(ScoreChanged(score)) => Action::CommitScore(score),
            Err(e) => {
                log::debug!("Scale: ignoring commit: {}", e);
                Action::None
            }
        }
    }

    fn cell_style(&self, score: Score) -> (Style, Style) {
        let band = self.selector.classify(score);
        let color = band_color(band);
        let is_selected = self.value == Some(score);
        let is_hovered = self.selector.hovered() == Some(score);

        if is_selected {
            let text = Style::default()
                .bg(color)
                .fg(band_foreground(band))
                .add_modifier(Modifier::BOLD);
            (text, Style::default().fg(color).add_modifier(Modifier::BOLD))
        } else if is_hovered {
            let text = Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            (text, Style::default().fg(color).add_modifier(Modifier::BOLD))
        } else if self.enabled {
            (Style::default().fg(color), Style::default().fg(color).add_modifier(Modifier::DIM))
        } else {
            (Style::default().fg(Color::DarkGray), Style::default().fg(Color::DarkGray))
        }
    }

    fn render_display_line(&self, f: &mut Frame, area: Rect) {
        let line = match self.display_score() {
            Some(score) => {
                let band = self.selector.classify(score);
                let style = Style::default().fg(band_color(band)).add_modifier(Modifier::BOLD);
                Line::from(vec![
                    Span::raw(format!("{} ", self.icons.band(band))),
                    Span::styled(score.to_string(), style),
                    Span::styled(format!(" · {}", self.selector.label_for(score)), style),
                    Span::styled(format!("  ({})", band.name()), Style::default().fg(Color::Gray)),
                ])
            }
            None => Line::from(Span::styled(SCALE_PROMPT, Style::default().fg(Color::Gray))),
        };

        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    fn render_legend(&self, f: &mut Frame, area: Rect) {
        let scale = self.selector.scale();
        let low_color = band_color(self.selector.classify(Score::new(scale.min())));
        let high_color = band_color(self.selector.classify(Score::new(scale.max())));
        let dot = self.icons.legend_dot();

        let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
        let low = Line::from(vec![
            Span::styled(format!("{} ", dot), Style::default().fg(low_color)),
            Span::styled(self.low_anchor.as_str(), Style::default().fg(Color::Gray)),
        ]);
        let high = Line::from(vec![
            Span::styled(self.high_anchor.as_str(), Style::default().fg(Color::Gray)),
            Span::styled(format!(" {}", dot), Style::default().fg(high_color)),
        ]);

        f.render_widget(Paragraph::new(low).alignment(Alignment::Left), halves[0]);
        f.render_widget(Paragraph::new(high).alignment(Alignment::Right), halves[1]);
    }
}

impl Component for ScoreScaleComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.enabled {
            return Action::None;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.step_preview(false);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.step_preview(true);
                Action::None
            }
            KeyCode::Home => {
                let min = Score::new(self.selector.scale().min());
                self.selector.set_hover_preview(Some(min));
                Action::None
            }
            KeyCode::End => {
                let max = Score::new(self.selector.scale().max());
                self.selector.set_hover_preview(Some(max));
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.selector.hovered() {
                Some(score) => self.commit(score),
                None => Action::None,
            },
            KeyCode::Char(c) => match c.to_digit(10).and_then(|digit| u8::try_from(digit).ok()) {
                Some(value) => self.commit(Score::new(value)),
                None => Action::None,
            },
            KeyCode::Esc => {
                self.selector.set_hover_preview(None);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.enabled {
            return Action::None;
        }

        let target = self.cell_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                self.selector.set_hover_preview(target);
                Action::None
            }
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(score) => self.commit(score),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.selector.set_hover_preview(None);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let rows = Layout::vertical([
            Constraint::Length(LayoutManager::SCALE_HEIGHT - 2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(rect);

        let scores: Vec<Score> = self.selector.scale().scores().collect();
        let cells = LayoutManager::score_cells(rows[0], scores.len());
        self.cells = scores.iter().copied().zip(cells.iter().copied()).collect();

        for (score, area) in self.cells.clone() {
            let (text_style, border_style) = self.cell_style(score);
            let border_type = if self.value == Some(score) {
                BorderType::Thick
            } else {
                BorderType::Rounded
            };
            let cell = Paragraph::new(Span::styled(score.to_string(), text_style))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(border_type)
                        .border_style(border_style),
                );
            f.render_widget(cell, area);
        }

        self.render_display_line(f, rows[1]);
        self.render_legend(f, rows[2]);
    }
}
