//! Survey form controller: score, comment and the submission lifecycle.
//!
//! ```text
//! Editing --submit() [score set]--> Submitting --(success)--> Submitted
//! Editing --submit() [no score]---> Editing      (error notification)
//! Submitting --(failure)----------> Editing      (error notification)
//! Submitted --reset()-------------> Editing
//! ```
//!
//! The synchronous halves ([`SurveyForm::begin_submit`] and
//! [`SurveyForm::finish_submit`]) let the UI run the submission in a background
//! task; [`SurveyForm::submit`] chains them around [`deliver`] for callers that
//! can simply await.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::notification::{Notification, Notifier};
use super::scale::{Scale, ScaleError, Score};
use super::submission::{deliver, SubmissionError, SubmissionPolicy, SubmissionReceipt, Submitter};
use crate::constants::{
    NOTICE_NO_SCORE_DESCRIPTION, NOTICE_NO_SCORE_TITLE, NOTICE_SUBMIT_FAILED_TITLE, NOTICE_THANKS_DESCRIPTION,
    NOTICE_THANKS_TITLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionPhase::Editing => "editing",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Submitted => "submitted",
        };
        f.write_str(name)
    }
}

/// Payload handed to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub score: Score,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("no score selected")]
    NoScoreSelected,

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error("the form cannot be edited while {0}")]
    Locked(SubmissionPhase),

    #[error("a submission is already in progress")]
    SubmissionInFlight,

    #[error("no submission is in progress")]
    NoSubmissionInFlight,

    #[error("only a submitted form can be reset")]
    NotSubmitted,

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl FormError {
    /// Errors that the user caused and was already told about.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, FormError::NoScoreSelected | FormError::Submission(_))
    }
}

pub struct SurveyForm {
    scale: Scale,
    score: Option<Score>,
    comment: String,
    phase: SubmissionPhase,
    last_receipt: Option<SubmissionReceipt>,
    notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for SurveyForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurveyForm")
            .field("scale", &self.scale)
            .field("score", &self.score)
            .field("comment", &self.comment)
            .field("phase", &self.phase)
            .field("last_receipt", &self.last_receipt)
            .finish_non_exhaustive()
    }
}

impl SurveyForm {
    pub fn new(scale: Scale, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            scale,
            score: None,
            comment: String::new(),
            phase: SubmissionPhase::Editing,
            last_receipt: None,
            notifier,
        }
    }

    #[must_use]
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.phase == SubmissionPhase::Editing
    }

    #[must_use]
    pub fn last_receipt(&self) -> Option<&SubmissionReceipt> {
        self.last_receipt.as_ref()
    }

    /// Set the authoritative score. Ignored outside the editing phase.
    pub fn update_score(&mut self, score: Score) -> Result<(), FormError> {
        if self.phase != SubmissionPhase::Editing {
            return Err(FormError::Locked(self.phase));
        }
        let score = self.scale.score(score.value())?;
        self.score = Some(score);
        Ok(())
    }

    pub fn update_comment(&mut self, text: impl Into<String>) -> Result<(), FormError> {
        if self.phase == SubmissionPhase::Submitted {
            return Err(FormError::Locked(self.phase));
        }
        self.comment = text.into();
        Ok(())
    }

    /// Validate and enter the submitting phase, returning the payload to send.
    pub fn begin_submit(&mut self) -> Result<SurveyResponse, FormError> {
        match self.phase {
            SubmissionPhase::Submitting => return Err(FormError::SubmissionInFlight),
            SubmissionPhase::Submitted => return Err(FormError::Locked(self.phase)),
            SubmissionPhase::Editing => {}
        }

        let Some(score) = self.score else {
            self.notifier.notify(Notification::error(
                NOTICE_NO_SCORE_TITLE,
                NOTICE_NO_SCORE_DESCRIPTION
                    .replace("{min}", &self.scale.min().to_string())
                    .replace("{max}", &self.scale.max().to_string()),
            ));
            return Err(FormError::NoScoreSelected);
        };

        self.phase = SubmissionPhase::Submitting;
        Ok(SurveyResponse {
            score,
            comment: self.comment.clone(),
        })
    }

    /// Apply the collaborator's outcome to an in-flight submission.
    pub fn finish_submit(
        &mut self,
        outcome: Result<SubmissionReceipt, SubmissionError>,
    ) -> Result<SubmissionReceipt, FormError> {
        if self.phase != SubmissionPhase::Submitting {
            return Err(FormError::NoSubmissionInFlight);
        }

        match outcome {
            Ok(receipt) => {
                self.phase = SubmissionPhase::Submitted;
                self.last_receipt = Some(receipt.clone());
                self.notifier
                    .notify(Notification::info(NOTICE_THANKS_TITLE, NOTICE_THANKS_DESCRIPTION));
                Ok(receipt)
            }
            Err(e) => {
                self.phase = SubmissionPhase::Editing;
                self.notifier
                    .notify(Notification::error(NOTICE_SUBMIT_FAILED_TITLE, e.to_string()));
                Err(FormError::Submission(e))
            }
        }
    }

    /// Run a whole submission: validate, deliver, settle the phase.
    pub async fn submit(
        &mut self,
        submitter: &dyn Submitter,
        policy: &SubmissionPolicy,
    ) -> Result<SubmissionReceipt, FormError> {
        let response = self.begin_submit()?;
        let outcome = deliver(submitter, &response, policy).await;
        self.finish_submit(outcome)
    }

    /// Clear the submitted response and start over.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.phase != SubmissionPhase::Submitted {
            return Err(FormError::NotSubmitted);
        }
        self.score = None;
        self.comment.clear();
        self.phase = SubmissionPhase::Editing;
        Ok(())
    }
}
