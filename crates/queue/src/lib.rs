//! Run a queue of asynchronous steps strictly one after another.
//!
//! Each entry of the queue is an `Option<T>`; `None` entries are skipped.
//! The next step is started only once the previous step's future has
//! resolved, and the run finishes when the returned future does.
//!
//! ```
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! use run_queue::run_queue;
//!
//! let mut seen = Vec::new();
//! let summary = run_queue(vec![Some(1), None, Some(2)], |n| {
//!     seen.push(n);
//!     async { Ok(()) }
//! })
//! .await?;
//!
//! assert_eq!(seen, vec![1, 2]);
//! assert_eq!((summary.completed, summary.skipped), (2, 1));
//! # anyhow::Ok(())
//! # }).unwrap();
//! ```

use std::future::Future;

use anyhow::{Context, Result};
use log::{debug, warn};
use tokio_util::sync::CancellationToken;

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps that ran to completion
    pub completed: usize,
    /// `None` entries passed over
    pub skipped: usize,
    /// True when the run stopped early because it was cancelled
    pub cancelled: bool,
}

/// Sequential runner with optional cancellation
#[derive(Debug, Clone, Default)]
pub struct SequentialRunner {
    cancel: CancellationToken,
}

impl SequentialRunner {
    /// Create a runner with no cancellation
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the run when `token` is cancelled.
    ///
    /// The token is checked before each step and raced against the step in
    /// flight, so a cancelled step's future is dropped without completing.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Run every present entry of `queue` through `step`, in order.
    ///
    /// The first failing step ends the run; its error is returned with the
    /// position of the entry in the queue attached.
    pub async fn run<T, I, F, Fut>(&self, queue: I, mut step: F) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Option<T>>,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let mut summary = RunSummary::default();

        for (index, entry) in queue.into_iter().enumerate() {
            if self.cancel.is_cancelled() {
                warn!("Run cancelled before step {}", index);
                summary.cancelled = true;
                break;
            }

            let Some(task) = entry else {
                debug!("Skipping empty step {}", index);
                summary.skipped += 1;
                continue;
            };

            debug!("Starting step {}", index);
            let outcome = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => None,
                result = step(task) => Some(result),
            };

            match outcome {
                None => {
                    warn!("Run cancelled during step {}", index);
                    summary.cancelled = true;
                    break;
                }
                Some(Err(err)) => {
                    warn!("Step {} failed: {:#}", index, err);
                    return Err(err).with_context(|| format!("Step {} failed", index));
                }
                Some(Ok(())) => {
                    debug!("Finished step {}", index);
                    summary.completed += 1;
                }
            }
        }

        debug!(
            "Run finished: {} completed, {} skipped, cancelled: {}",
            summary.completed, summary.skipped, summary.cancelled
        );
        Ok(summary)
    }
}

/// Run `queue` through `step` with no cancellation.
pub async fn run_queue<T, I, F, Fut>(queue: I, step: F) -> Result<RunSummary>
where
    I: IntoIterator<Item = Option<T>>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    SequentialRunner::new().run(queue, step).await
}

/// Like [`run_queue`], then hand the summary to `on_done`.
///
/// `on_done` is called exactly once, and only when the run succeeds.
pub async fn run_queue_with_callback<T, I, F, Fut, D>(
    queue: I,
    step: F,
    on_done: D,
) -> Result<RunSummary>
where
    I: IntoIterator<Item = Option<T>>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<()>>,
    D: FnOnce(&RunSummary),
{
    let summary = run_queue(queue, step).await?;
    on_done(&summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_empty_queue_completes_immediately() {
        let summary = run_queue(Vec::<Option<u8>>::new(), |_| async { Ok(()) })
            .await
            .unwrap();
        assert_eq!(summary, RunSummary::default());
    }

    #[tokio::test]
    async fn test_all_skipped() {
        let summary = run_queue(vec![None::<u8>, None], |_| async {
            Err(anyhow::anyhow!("should not run"))
        })
        .await
        .unwrap();
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.completed, 0);
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let summary = SequentialRunner::new()
            .with_cancellation(token)
            .run(vec![Some(1)], |_| async { Ok(()) })
            .await
            .unwrap();
        assert!(summary.cancelled);
        assert_eq!(summary.completed, 0);
    }
}
