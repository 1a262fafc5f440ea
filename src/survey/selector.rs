//! Score selector state: hover preview and commit events.

use super::scale::{Scale, ScaleError, Score, ScoreBand};

/// Emitted when the user commits a value on the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChanged(pub Score);

/// Controlled score selector.
///
/// The committed score belongs to the form and is passed in when reading the
/// display value; the selector only keeps the transient hover preview.
#[derive(Debug, Clone, Default)]
pub struct ScoreSelector {
    scale: Scale,
    hovered: Option<Score>,
}

impl ScoreSelector {
    #[must_use]
    pub fn new(scale: Scale) -> Self {
        Self { scale, hovered: None }
    }

    #[must_use]
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    #[must_use]
    pub fn hovered(&self) -> Option<Score> {
        self.hovered
    }

    /// Set or clear the preview. Candidates outside the scale clear it.
    pub fn set_hover_preview(&mut self, candidate: Option<Score>) {
        self.hovered = candidate.filter(|score| self.scale.contains(*score));
    }

    pub fn commit(&self, candidate: Score) -> Result<ScoreChanged, ScaleError> {
        let score = self.scale.score(candidate.value())?;
        log::debug!("Selector: committed score {}", score);
        Ok(ScoreChanged(score))
    }

    #[must_use]
    pub fn classify(&self, candidate: Score) -> ScoreBand {
        self.scale.classify(candidate)
    }

    #[must_use]
    pub fn label_for(&self, candidate: Score) -> &str {
        self.scale.label_for(candidate)
    }

    /// Hover wins over the committed value.
    #[must_use]
    pub fn display_score(&self, committed: Option<Score>) -> Option<Score> {
        self.hovered.or(committed)
    }
}
