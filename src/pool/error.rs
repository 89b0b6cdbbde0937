//! Error types for the worker pool.

use thiserror::Error;

/// Errors that can occur within the worker pool itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PoolError {
    /// The pool queue is closed; no more tasks are accepted.
    #[error("Worker pool closed")]
    Closed,

    /// The worker running a task dropped its result channel.
    #[error("Worker dropped task result")]
    WorkerDropped,

    /// A worker task panicked or was cancelled.
    #[error("Worker failed: {0}")]
    WorkerFailed(String),

    /// A pool needs at least one worker.
    #[error("Invalid pool size: {0}")]
    InvalidSize(usize),
}
