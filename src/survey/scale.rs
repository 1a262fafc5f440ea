//! Rating scale definitions: scores, bands and qualitative labels.
//!
//! A [`Scale`] carries everything that differs between the 11-point and the
//! 5-point survey: the score range, the band thresholds and the label table.
//! Classification and labelling are pure functions of the score.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// A committed rating value.
///
/// Range checks happen against a [`Scale`]; a `Score` obtained through
/// [`Scale::score`] is always within that scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Net Promoter style grouping of a score.
///
/// Variants are ordered by preference, so `Detractor < Passive < Promoter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Detractor,
    Passive,
    Promoter,
}

impl ScoreBand {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ScoreBand::Detractor => "Detractor",
            ScoreBand::Passive => "Pasivo",
            ScoreBand::Promoter => "Promotor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScaleError {
    #[error("score {score} is outside the scale range {min}..={max}")]
    OutOfRange { score: u8, min: u8, max: u8 },

    #[error("scale minimum {min} must be lower than maximum {max}")]
    EmptyRange { min: u8, max: u8 },

    #[error("band thresholds must satisfy {min} < passive_from ({passive_from}) < promoter_from ({promoter_from}) <= {max}")]
    InvalidThresholds {
        min: u8,
        max: u8,
        passive_from: u8,
        promoter_from: u8,
    },

    #[error("expected {expected} labels (one per score), got {actual}")]
    LabelCount { expected: usize, actual: usize },
}

/// Built-in scale granularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalePreset {
    /// 0-10, the classic NPS question.
    #[default]
    ElevenPoint,
    /// 1-5 satisfaction scale.
    FivePoint,
}

impl ScalePreset {
    #[must_use]
    pub fn scale(self) -> Scale {
        match self {
            ScalePreset::ElevenPoint => ELEVEN_POINT.clone(),
            ScalePreset::FivePoint => FIVE_POINT.clone(),
        }
    }
}

static ELEVEN_POINT: Lazy<Scale> = Lazy::new(|| Scale {
    min: 0,
    max: 10,
    passive_from: 7,
    promoter_from: 9,
    labels: [
        "Muy malo",
        "Muy malo",
        "Malo",
        "Malo",
        "Regular",
        "Regular",
        "Bueno",
        "Bueno",
        "Muy bueno",
        "Muy bueno",
        "Excelente",
    ]
    .iter()
    .map(|label| (*label).to_string())
    .collect(),
});

static FIVE_POINT: Lazy<Scale> = Lazy::new(|| Scale {
    min: 1,
    max: 5,
    passive_from: 3,
    promoter_from: 5,
    labels: ["Muy malo", "Malo", "Regular", "Bueno", "Excelente"]
        .iter()
        .map(|label| (*label).to_string())
        .collect(),
});

/// A rating scale: closed range, band thresholds and one label per value.
///
/// Scores below `passive_from` are detractors, scores from `passive_from` up to
/// (but excluding) `promoter_from` are passives, the rest are promoters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScaleDefinition")]
pub struct Scale {
    min: u8,
    max: u8,
    passive_from: u8,
    promoter_from: u8,
    labels: Vec<String>,
}

/// Unchecked wire form of a [`Scale`]; deserialization goes through [`Scale::new`].
#[derive(Deserialize)]
struct ScaleDefinition {
    min: u8,
    max: u8,
    passive_from: u8,
    promoter_from: u8,
    labels: Vec<String>,
}

impl TryFrom<ScaleDefinition> for Scale {
    type Error = ScaleError;

    fn try_from(definition: ScaleDefinition) -> Result<Self, Self::Error> {
        Scale::new(
            definition.min,
            definition.max,
            definition.passive_from,
            definition.promoter_from,
            definition.labels,
        )
    }
}

impl Default for Scale {
    fn default() -> Self {
        ScalePreset::default().scale()
    }
}

impl Scale {
    /// Build a custom scale, rejecting definitions that would leave a band
    /// empty or a value without a label.
    pub fn new(min: u8, max: u8, passive_from: u8, promoter_from: u8, labels: Vec<String>) -> Result<Self, ScaleError> {
        if min >= max {
            return Err(ScaleError::EmptyRange { min, max });
        }
        if !(min < passive_from && passive_from < promoter_from && promoter_from <= max) {
            return Err(ScaleError::InvalidThresholds {
                min,
                max,
                passive_from,
                promoter_from,
            });
        }
        let expected = usize::from(max - min) + 1;
        if labels.len() != expected {
            return Err(ScaleError::LabelCount {
                expected,
                actual: labels.len(),
            });
        }

        Ok(Self {
            min,
            max,
            passive_from,
            promoter_from,
            labels,
        })
    }

    #[must_use]
    pub fn eleven_point() -> Self {
        ScalePreset::ElevenPoint.scale()
    }

    #[must_use]
    pub fn five_point() -> Self {
        ScalePreset::FivePoint.scale()
    }

    #[must_use]
    pub fn min(&self) -> u8 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u8 {
        self.max
    }

    /// Number of selectable values.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.max - self.min) + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn range(&self) -> RangeInclusive<u8> {
        self.min..=self.max
    }

    /// Every selectable score, lowest first.
    pub fn scores(&self) -> impl Iterator<Item = Score> {
        self.range().map(Score::new)
    }

    #[must_use]
    pub fn contains(&self, score: Score) -> bool {
        self.range().contains(&score.value())
    }

    /// Validate a raw value against this scale.
    pub fn score(&self, value: u8) -> Result<Score, ScaleError> {
        if self.range().contains(&value) {
            Ok(Score::new(value))
        } else {
            Err(ScaleError::OutOfRange {
                score: value,
                min: self.min,
                max: self.max,
            })
        }
    }

    #[must_use]
    pub fn classify(&self, score: Score) -> ScoreBand {
        let value = score.value();
        if value < self.passive_from {
            ScoreBand::Detractor
        } else if value < self.promoter_from {
            ScoreBand::Passive
        } else {
            ScoreBand::Promoter
        }
    }

    /// Qualitative label for a score. Values outside the range take the label
    /// of the nearest end.
    #[must_use]
    pub fn label_for(&self, score: Score) -> &str {
        let clamped = score.value().clamp(self.min, self.max);
        let index = usize::from(clamped - self.min);
        self.labels.get(index).map(String::as_str).unwrap_or_default()
    }

    /// The next score up, saturating at the maximum.
    #[must_use]
    pub fn next(&self, score: Score) -> Score {
        Score::new(score.value().saturating_add(1).clamp(self.min, self.max))
    }

    /// The next score down, saturating at the minimum.
    #[must_use]
    pub fn previous(&self, score: Score) -> Score {
        Score::new(score.value().saturating_sub(1).clamp(self.min, self.max))
    }
}
