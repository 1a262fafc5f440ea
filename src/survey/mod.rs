//! Survey domain: rating scales, the score selector, the form state machine
//! and its two collaborators (notifications and submission).

pub mod form;
pub mod notification;
pub mod scale;
pub mod selector;
pub mod submission;

pub use form::{FormError, SubmissionPhase, SurveyForm, SurveyResponse};
pub use notification::{ConsoleNotifier, Notification, Notifier, Severity};
pub use scale::{Scale, ScaleError, ScalePreset, Score, ScoreBand};
pub use selector::{ScoreChanged, ScoreSelector};
pub use submission::{deliver, SimulatedSubmitter, SubmissionError, SubmissionPolicy, SubmissionReceipt, Submitter};
