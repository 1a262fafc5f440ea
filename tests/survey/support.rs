//! Test doubles for the survey collaborators.
#![allow(dead_code)]

use async_trait::async_trait;
use likert::survey::{
    Notification, Notifier, SubmissionError, SubmissionReceipt, Submitter, SurveyResponse,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Keeps every notification it receives
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Replays scripted outcomes and records every payload it was handed.
///
/// Once the script runs out every call succeeds.
pub struct ScriptedSubmitter {
    delay: Duration,
    outcomes: Mutex<VecDeque<Result<(), SubmissionError>>>,
    received: Mutex<Vec<SurveyResponse>>,
    calls: AtomicUsize,
}

impl ScriptedSubmitter {
    pub fn accepting() -> Self {
        Self::scripted(Duration::ZERO, Vec::new())
    }

    pub fn scripted(delay: Duration, outcomes: Vec<Result<(), SubmissionError>>) -> Self {
        Self {
            delay,
            outcomes: Mutex::new(outcomes.into()),
            received: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<SurveyResponse> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl Submitter for ScriptedSubmitter {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn submit(&self, response: &SurveyResponse) -> Result<SubmissionReceipt, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(response.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let outcome = self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()));
        outcome.map(|()| SubmissionReceipt::new())
    }
}
