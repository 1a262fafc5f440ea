use likert::survey::{Score, SimulatedSubmitter, SubmissionError, SubmissionPolicy, SurveyResponse};
use likert::ui::core::{Action, TaskManager};
use std::sync::Arc;
use std::time::Duration;

fn response() -> SurveyResponse {
    SurveyResponse {
        score: Score::new(8),
        comment: String::new(),
    }
}

#[tokio::test]
async fn test_submission_reports_success() {
    let (mut manager, mut rx) = TaskManager::new();
    let submitter = Arc::new(SimulatedSubmitter::new(Duration::from_millis(5)));

    let first = manager.spawn_submission(submitter.clone(), response(), SubmissionPolicy::default());
    assert_eq!(first, 1);
    assert_eq!(manager.task_count(), 1);

    let action = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(action, Action::SubmissionSucceeded(_)));

    // Give the task a moment to finish after sending
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!manager.is_submitting());
    let finished = manager.cleanup_finished_tasks();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].0, first);
    assert!(finished[0].1.contains("simulated"));
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_submission_reports_failure() {
    let (mut manager, mut rx) = TaskManager::new();
    let submitter = Arc::new(SimulatedSubmitter::failing(Duration::from_millis(5)));

    manager.spawn_submission(submitter, response(), SubmissionPolicy::default());

    let action = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(action, Action::SubmissionFailed(SubmissionError::Transport(_))));
}

#[tokio::test]
async fn test_submission_timeout_is_reported() {
    let (mut manager, mut rx) = TaskManager::new();
    let submitter = Arc::new(SimulatedSubmitter::new(Duration::from_secs(5)));
    let policy = SubmissionPolicy {
        timeout: Duration::from_millis(20),
        max_attempts: 1,
    };

    manager.spawn_submission(submitter, response(), policy);
    assert!(manager.is_submitting());

    let action = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(action, Action::SubmissionFailed(SubmissionError::Timeout(_))));
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, _rx) = TaskManager::new();
    let submitter = Arc::new(SimulatedSubmitter::new(Duration::from_secs(5)));

    manager.spawn_submission(submitter, response(), SubmissionPolicy::default());
    assert_eq!(manager.task_count(), 1);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_submission_finishes_after_receiver_is_gone() {
    let (mut manager, rx) = TaskManager::new();
    drop(rx);
    let submitter = Arc::new(SimulatedSubmitter::new(Duration::from_millis(5)));

    let id = manager.spawn_submission(submitter, response(), SubmissionPolicy::default());

    tokio::time::timeout(Duration::from_secs(2), async {
        while manager.is_submitting() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap();

    let finished = manager.cleanup_finished_tasks();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].0, id);
}
