//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use crate::survey::ScoreBand;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Faces shown next to the display score
#[derive(Debug, Clone)]
pub struct BandIcons {
    pub detractor: &'static str,
    pub passive: &'static str,
    pub promoter: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub error: &'static str,
    pub info: &'static str,
    pub success: &'static str,
    pub send: &'static str,
    pub spinner: &'static str,
    pub legend_dot: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub bands: BandIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            bands: BandIcons {
                detractor: "😞",
                passive: "😐",
                promoter: "😍",
            },
            ui: UiIcons {
                error: "❌",
                info: "💡",
                success: "✅",
                send: "📨",
                spinner: "🔄",
                legend_dot: "●",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            bands: BandIcons {
                detractor: "☹",
                passive: "◎",
                promoter: "☺",
            },
            ui: UiIcons {
                error: "✗",
                info: "ⓘ",
                success: "✓",
                send: "➤",
                spinner: "⟳",
                legend_dot: "●",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            bands: BandIcons {
                detractor: ":(",
                passive: ":|",
                promoter: ":D",
            },
            ui: UiIcons {
                error: "X",
                info: "i",
                success: "+",
                send: ">",
                spinner: "...",
                legend_dot: "o",
            },
        }
    }

    #[must_use]
    pub fn band(&self, band: ScoreBand) -> &'static str {
        let bands = self.icons().bands;
        match band {
            ScoreBand::Detractor => bands.detractor,
            ScoreBand::Passive => bands.passive,
            ScoreBand::Promoter => bands.promoter,
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn send(&self) -> &'static str {
        self.icons().ui.send
    }

    #[must_use]
    pub fn spinner(&self) -> &'static str {
        self.icons().ui.spinner
    }

    #[must_use]
    pub fn legend_dot(&self) -> &'static str {
        self.icons().ui.legend_dot
    }
}
