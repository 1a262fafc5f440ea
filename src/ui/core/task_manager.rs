use super::actions::Action;
use crate::survey::{deliver, SubmissionPolicy, Submitter, SurveyResponse};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Runs slow work off the UI loop and reports back through the action channel
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn delivery of a survey response
    pub fn spawn_submission(
        &mut self,
        submitter: Arc<dyn Submitter>,
        response: SurveyResponse,
        policy: SubmissionPolicy,
    ) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = format!("Submit survey response via {}", submitter.name());

        let handle = tokio::spawn(async move {
            let action = match deliver(submitter.as_ref(), &response, &policy).await {
                Ok(receipt) => Action::SubmissionSucceeded(receipt),
                Err(e) => Action::SubmissionFailed(e),
            };
            if action_sender.send(action).is_err() {
                log::debug!("Submission finished after the UI went away");
            }
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Drop finished tasks, returning their ids and descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        // The outcome itself already went out over the action channel
        finished
            .into_iter()
            .filter_map(|task_id| self.tasks.remove(&task_id))
            .map(|task| {
                log::debug!("Task {} took {:?}", task.id, task.elapsed());
                (task.id, task.description)
            })
            .collect()
    }

    /// Check if a submission is still running
    pub fn is_submitting(&self) -> bool {
        self.tasks.values().any(|task| !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
