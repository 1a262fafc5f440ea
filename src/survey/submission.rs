//! Submission collaborator abstraction.
//!
//! The survey has no real backend. [`Submitter`] is the seam where one would
//! plug in; [`SimulatedSubmitter`] fakes the round trip with a fixed delay.
//! [`deliver`] wraps any submitter with a bounded timeout and retry policy.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use super::form::SurveyResponse;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission timed out after {0:?}")]
    Timeout(Duration),

    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("submission failed: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// Timeouts and transport failures may succeed on a second try.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::Timeout(_) | SubmissionError::Transport(_))
    }
}

/// Acknowledgement of an accepted response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }

    /// Short reference shown to the user.
    #[must_use]
    pub fn reference(&self) -> String {
        self.id.simple().to_string()[..8].to_uppercase()
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can accept a survey response.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    async fn submit(&self, response: &SurveyResponse) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Stand-in backend: waits a fixed delay, then accepts (or fails on demand).
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    #[must_use]
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn submit(&self, response: &SurveyResponse) -> Result<SubmissionReceipt, SubmissionError> {
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(SubmissionError::Transport("simulated backend unavailable".to_string()));
        }

        let receipt = SubmissionReceipt::new();
        log::info!(
            "Simulated backend accepted score {} (receipt {})",
            response.score,
            receipt.reference()
        );
        Ok(receipt)
    }
}

/// Timeout and retry bounds for a single submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    pub timeout: Duration,
    pub max_attempts: u32,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_attempts: 1,
        }
    }
}

const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Deliver a response, enforcing the policy's timeout on every attempt.
pub async fn deliver(
    submitter: &dyn Submitter,
    response: &SurveyResponse,
    policy: &SubmissionPolicy,
) -> Result<SubmissionReceipt, SubmissionError> {
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let outcome = match tokio::time::timeout(policy.timeout, submitter.submit(response)).await {
            Ok(result) => result,
            Err(_) => Err(SubmissionError::Timeout(policy.timeout)),
        };

        match outcome {
            Ok(receipt) => return Ok(receipt),
            Err(e) if e.is_retryable() && attempt < attempts => {
                log::warn!(
                    "Submission via '{}' failed (attempt {}/{}): {}",
                    submitter.name(),
                    attempt,
                    attempts,
                    e
                );
                attempt += 1;
                tokio::time::sleep(RETRY_BACKOFF).await;
            }
            Err(e) => {
                log::error!("Submission via '{}' failed: {}", submitter.name(), e);
                return Err(e);
            }
        }
    }
}
