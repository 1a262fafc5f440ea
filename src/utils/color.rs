use crate::survey::ScoreBand;
use ratatui::style::Color;

/// Terminal color for a score band
#[must_use]
pub fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Detractor => Color::Rgb(220, 76, 62),
        ScoreBand::Passive => Color::Rgb(230, 180, 40),
        ScoreBand::Promoter => Color::Rgb(54, 167, 90),
    }
}

/// Text color readable on top of [`band_color`]
#[must_use]
pub fn band_foreground(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Passive => Color::Black,
        ScoreBand::Detractor | ScoreBand::Promoter => Color::White,
    }
}

/// Accent used for the submit button and focus rings
pub const ACCENT: Color = Color::Rgb(255, 107, 53);
