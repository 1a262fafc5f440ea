use crate::survey::{Score, SubmissionError, SubmissionReceipt};

/// Which part of the survey card receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Scale,
    Comment,
    SubmitButton,
}

impl FocusTarget {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FocusTarget::Scale => FocusTarget::Comment,
            FocusTarget::Comment => FocusTarget::SubmitButton,
            FocusTarget::SubmitButton => FocusTarget::Scale,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            FocusTarget::Scale => FocusTarget::SubmitButton,
            FocusTarget::Comment => FocusTarget::Scale,
            FocusTarget::SubmitButton => FocusTarget::Comment,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Score selection
    CommitScore(Score),

    // Comment editing
    UpdateComment(String),

    // Focus
    FocusNext,
    FocusPrevious,
    Focus(FocusTarget),

    // Submission lifecycle
    Submit,
    SubmissionSucceeded(SubmissionReceipt),
    SubmissionFailed(SubmissionError),
    Reset,

    // UI operations
    ShowLogs(bool),
    CycleIconTheme,

    // App control
    Quit,
    None,
}
