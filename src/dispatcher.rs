//! Fans clients out over the worker pool and joins the results.
//!
//! Each task hands back its own [`OrderReport`]; reports are merged in the order the
//! clients were submitted, so the output does not depend on worker interleaving.

use std::future::Future;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::model::{AgentAction, Catalog, Client};
use crate::pool::{PoolError, WorkerPool};
use crate::processor::{OrderReport, OrderTask};

/// Result of one dispatch round.
#[derive(Debug, Clone, Default)]
pub struct DispatchOutcome {
    /// Reports of completed clients, in submission order.
    pub reports: Vec<OrderReport>,
    /// Clients that were submitted.
    pub submitted: usize,
    /// The join was cut short by a shutdown signal.
    pub interrupted: bool,
}

impl DispatchOutcome {
    /// All actions, merged in client-submission order.
    pub fn actions(&self) -> Vec<AgentAction> {
        self.reports
            .iter()
            .flat_map(|report| report.actions.iter().cloned())
            .collect()
    }

    pub fn grand_total(&self) -> f64 {
        self.reports.iter().map(|report| report.total).sum()
    }

    /// Every submitted client produced a report.
    pub fn is_complete(&self) -> bool {
        self.reports.len() == self.submitted
    }
}

/// Runs the order processor for a batch of clients on a fixed-size pool.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    pool_size: usize,
    queue_capacity: usize,
}

impl Dispatcher {
    pub fn new(pool_size: usize, queue_capacity: usize) -> Self {
        Self {
            pool_size,
            queue_capacity,
        }
    }

    /// Submits one task per client, then waits until all have finished or
    /// `shutdown` resolves.
    ///
    /// An interrupted wait is logged and the outcome carries whatever reports had
    /// completed by then, with `interrupted` set. Workers still running at that
    /// point are detached when the pool drops; their reports are not collected.
    pub async fn dispatch<F>(
        &self,
        clients: Vec<Client>,
        catalog: Arc<Catalog>,
        shutdown: F,
    ) -> Result<DispatchOutcome, PoolError>
    where
        F: Future<Output = ()>,
    {
        let mut pool = WorkerPool::new(self.pool_size, self.queue_capacity)?;

        let mut handles = Vec::with_capacity(clients.len());
        for client in clients {
            handles.push(pool.submit(OrderTask::new(client, catalog.clone())).await?);
        }
        let submitted = handles.len();
        let workers = pool.size();
        info!(submitted, workers, "Orders submitted");

        let interrupted = tokio::select! {
            biased;
            _ = shutdown => {
                warn!(
                    workers,
                    "Interrupted while waiting for workers, abandoning the ones still running"
                );
                true
            }
            joined = pool.shutdown() => {
                if let Err(e) = joined {
                    error!(error = %e, "Error while waiting for workers to finish");
                }
                false
            }
        };

        let mut reports = Vec::with_capacity(submitted);
        for mut handle in handles {
            if let Some(report) = handle.try_output() {
                reports.push(report);
            }
        }

        let outcome = DispatchOutcome {
            reports,
            submitted,
            interrupted,
        };
        if !outcome.is_complete() {
            warn!(
                completed = outcome.reports.len(),
                submitted, "Not every order completed, output may be incomplete"
            );
        }
        Ok(outcome)
    }
}
