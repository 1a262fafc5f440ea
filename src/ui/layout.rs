//! Layout management and calculations

use crate::constants::{CARD_MAX_WIDTH, SCORE_CELL_HEIGHT, SCORE_CELL_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the page around the survey card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub banner: Option<Rect>,
    pub main: Rect,
    pub footer: Option<Rect>,
}

/// Rows inside the survey card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAreas {
    pub header: Rect,
    pub question: Rect,
    pub scale: Rect,
    pub comment: Rect,
    pub button: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Height the editing card needs, borders included
    pub const CARD_HEIGHT: u16 = 22;
    /// Height of the scale row: cells, display line, legend
    pub const SCALE_HEIGHT: u16 = SCORE_CELL_HEIGHT + 2;

    /// Split the screen into banner, main area and footer (1 line each when shown)
    #[must_use]
    pub fn page_layout(area: Rect, show_banner: bool, show_footer: bool) -> PageAreas {
        let banner_height = u16::from(show_banner);
        let footer_height = u16::from(show_footer);

        let chunks = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);

        PageAreas {
            banner: show_banner.then_some(chunks[0]),
            main: chunks[1],
            footer: show_footer.then_some(chunks[2]),
        }
    }

    /// Center a card of the given height, capped at the card max width
    #[must_use]
    pub fn card_rect(area: Rect, height: u16) -> Rect {
        let width = area.width.min(CARD_MAX_WIDTH);
        let height = area.height.min(height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        Rect::new(x, y, width, height)
    }

    /// Split the card interior into its rows
    #[must_use]
    pub fn card_layout(inner: Rect) -> CardAreas {
        let chunks = Layout::vertical([
            Constraint::Length(3),                  // Title + subtitle + spacer
            Constraint::Length(2),                  // Question
            Constraint::Length(Self::SCALE_HEIGHT), // Scale
            Constraint::Length(1),                  // Spacer
            Constraint::Length(6),                  // Comment prompt + box
            Constraint::Length(3),                  // Submit button
        ])
        .split(inner);

        CardAreas {
            header: chunks[0],
            question: chunks[1],
            scale: chunks[2],
            comment: chunks[4],
            button: chunks[5],
        }
    }

    /// Lay out `count` score cells side by side, centered in `area`.
    ///
    /// Cells shrink to fit narrow terminals but never below 3 columns.
    #[must_use]
    pub fn score_cells(area: Rect, count: usize) -> Vec<Rect> {
        if count == 0 || area.width == 0 {
            return Vec::new();
        }

        let count_u16 = u16::try_from(count).unwrap_or(u16::MAX);
        let cell_width = (area.width / count_u16).clamp(3, SCORE_CELL_WIDTH);
        let total_width = cell_width.saturating_mul(count_u16).min(area.width);
        let start_x = area.x + (area.width - total_width) / 2;
        let height = area.height.min(SCORE_CELL_HEIGHT);

        (0..count_u16)
            .map(|i| Rect::new(start_x + i * cell_width, area.y, cell_width, height))
            .take_while(|cell| cell.right() <= area.right())
            .collect()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
