//! # Core Worker Pool
//!
//! A bounded fan-out primitive: `size` workers pull tasks from one shared queue and
//! send each output back over its own oneshot channel.
//!
//! ## Key Types
//!
//! - [`PoolTask`]: The trait every unit of work implements.
//! - [`WorkerPool`]: Owns the queue sender and the worker handles.
//! - [`TaskHandle`]: The receiving end for one task's output.
//!
//! ## Lifecycle
//!
//! 1. [`WorkerPool::new`] spawns the workers.
//! 2. [`WorkerPool::submit`] enqueues tasks; it waits while the queue is full.
//! 3. [`WorkerPool::shutdown`] closes the queue. Workers drain what is left and exit,
//!    and `shutdown` returns once every worker has stopped.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::error::PoolError;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// A unit of work that can be run by a [`WorkerPool`].
///
/// Tasks own their inputs (share read-only data through an `Arc`) and run to
/// completion once a worker picks them up.
#[async_trait]
pub trait PoolTask: Send + 'static {
    /// The value handed back to the submitter.
    type Output: Send + Debug + 'static;

    async fn execute(self) -> Self::Output;
}

type Job<T> = (T, oneshot::Sender<<T as PoolTask>::Output>);

// =============================================================================
// 2. THE HANDLE
// =============================================================================

/// Receives the output of one submitted task.
#[derive(Debug)]
pub struct TaskHandle<O> {
    receiver: oneshot::Receiver<O>,
}

impl<O> TaskHandle<O> {
    /// Waits for the task to finish.
    pub async fn output(self) -> Result<O, PoolError> {
        self.receiver.await.map_err(|_| PoolError::WorkerDropped)
    }

    /// Takes the output if the task has already finished.
    pub fn try_output(&mut self) -> Option<O> {
        self.receiver.try_recv().ok()
    }
}

// =============================================================================
// 3. THE POOL
// =============================================================================

/// A fixed set of workers processing submitted tasks from a shared queue.
///
/// **Concurrency Model**:
/// At most `size` tasks run at once. The queue receiver sits behind an async
/// `Mutex`, so exactly one idle worker waits on it at a time; the others wait for
/// the lock.
pub struct WorkerPool<T: PoolTask> {
    sender: Option<mpsc::Sender<Job<T>>>,
    workers: Vec<JoinHandle<()>>,
    size: usize,
}

impl<T: PoolTask> WorkerPool<T> {
    /// Spawns `size` workers on the current Tokio runtime.
    pub fn new(size: usize, queue_capacity: usize) -> Result<Self, PoolError> {
        if size == 0 {
            return Err(PoolError::InvalidSize(size));
        }

        let (sender, receiver) = mpsc::channel::<Job<T>>(queue_capacity.max(1));
        let receiver = Arc::new(Mutex::new(receiver));
        let workers = (0..size)
            .map(|worker_id| tokio::spawn(run_worker::<T>(worker_id, receiver.clone())))
            .collect();

        info!(size, queue_capacity, "Worker pool started");
        Ok(Self {
            sender: Some(sender),
            workers,
            size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Queues `task` and returns a handle to its output.
    pub async fn submit(&self, task: T) -> Result<TaskHandle<T::Output>, PoolError> {
        let sender = self.sender.as_ref().ok_or(PoolError::Closed)?;
        let (respond_to, receiver) = oneshot::channel();
        sender
            .send((task, respond_to))
            .await
            .map_err(|_| PoolError::Closed)?;
        Ok(TaskHandle { receiver })
    }

    /// Closes the queue and waits for every worker to finish.
    ///
    /// Tasks already queued still run. Returns the first worker failure, after
    /// all workers have been awaited.
    pub async fn shutdown(&mut self) -> Result<(), PoolError> {
        // Dropping the sender lets workers see the closed queue once it is empty.
        drop(self.sender.take());

        let mut result = Ok(());
        for handle in self.workers.drain(..) {
            if let Err(e) = handle.await {
                warn!(error = %e, "Worker task failed");
                if result.is_ok() {
                    result = Err(PoolError::WorkerFailed(e.to_string()));
                }
            }
        }

        info!(size = self.size, "Worker pool shut down");
        result
    }
}

async fn run_worker<T: PoolTask>(
    worker_id: usize,
    receiver: Arc<Mutex<mpsc::Receiver<Job<T>>>>,
) {
    debug!(worker_id, "Worker started");
    let mut completed = 0usize;

    loop {
        // The guard is released before the task runs.
        let job = receiver.lock().await.recv().await;
        let Some((task, respond_to)) = job else {
            break;
        };

        let output = task.execute().await;
        completed += 1;
        if respond_to.send(output).is_err() {
            debug!(worker_id, "Submitter dropped task handle");
        }
    }

    debug!(worker_id, completed, "Worker stopped");
}
