//! Single-slot queue for bulk Discord operations.

use std::{future::Future, sync::Arc};
use tokio::sync::Semaphore;

use crate::server::error::AppError;

/// Runs queued operations one at a time, in submission order.
///
/// Clones share the same slot. Tokio's semaphore is fair, so waiters acquire the permit in
/// the order they called `run`.
#[derive(Clone)]
pub struct TaskQueue {
    permit: Arc<Semaphore>,
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskQueue {
    pub fn new() -> Self {
        Self {
            permit: Arc::new(Semaphore::new(1)),
        }
    }

    /// Waits for the slot, then drives `task` to completion while holding it.
    ///
    /// # Returns
    /// - The task's own result
    /// - `Err(AppError::InternalError)` - The queue was closed
    pub async fn run<F, T>(&self, task: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        let _permit = self
            .permit
            .acquire()
            .await
            .map_err(|e| AppError::InternalError(format!("Task queue closed: {}", e)))?;

        task.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    #[tokio::test]
    async fn never_runs_two_tasks_at_once() {
        let queue = TaskQueue::new();
        let running = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..5 {
            let queue = queue.clone();
            let running = running.clone();
            let max_seen = max_seen.clone();
            handles.push(tokio::spawn(async move {
                queue
                    .run(async {
                        let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                        max_seen.fetch_max(now, Ordering::SeqCst);
                        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
                        running.fetch_sub(1, Ordering::SeqCst);
                        Ok(())
                    })
                    .await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn runs_tasks_in_submission_order() {
        let queue = TaskQueue::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        // Hold the slot so every task below queues up behind it.
        let blocker = queue.permit.clone().acquire_owned().await.unwrap();

        let mut handles = Vec::new();
        for i in 0..4 {
            let queue = queue.clone();
            let order = order.clone();
            handles.push(tokio::spawn(async move {
                queue
                    .run(async move {
                        order.lock().await.push(i);
                        Ok(())
                    })
                    .await
            }));
            // Let the task reach the semaphore before spawning the next one.
            tokio::task::yield_now().await;
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        drop(blocker);
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(*order.lock().await, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn returns_task_errors() {
        let queue = TaskQueue::new();

        let result: Result<(), AppError> = queue
            .run(async { Err(AppError::BadRequest("nope".to_string())) })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
