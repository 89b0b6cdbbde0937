use std::future::Future;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};

use crate::config::RestaurantConfig;
use crate::dispatcher::Dispatcher;
use crate::error::RestaurantError;
use crate::loader::{load_clients, load_menu};
use crate::report::write_agents;

/// What a completed run did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub clients: usize,
    pub actions: usize,
    pub grand_total: f64,
    pub interrupted: bool,
}

/// The top-level orchestrator for one batch of orders.
///
/// # Flow
///
/// 1. Load the menu and the clients (any failure aborts before processing)
/// 2. Dispatch every client to the worker pool and join
/// 3. Write the merged agent actions to the output file
///
/// # Example
///
/// ```ignore
/// let restaurant = Restaurant::new(RestaurantConfig::default());
/// let summary = restaurant.run().await?;
/// ```
pub struct Restaurant {
    config: RestaurantConfig,
}

impl Restaurant {
    pub fn new(config: RestaurantConfig) -> Self {
        Self { config }
    }

    /// Runs the batch, treating Ctrl-C during the join as an interruption.
    pub async fn run(&self) -> Result<RunSummary, RestaurantError> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Unable to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Runs the batch, with `shutdown` interrupting the wait for workers.
    pub async fn run_until<F>(&self, shutdown: F) -> Result<RunSummary, RestaurantError>
    where
        F: Future<Output = ()>,
    {
        let catalog = Arc::new(load_menu(&self.config.menu_path)?);
        let clients = load_clients(&self.config.clients_path)?;
        info!(
            menu_items = catalog.len(),
            clients = clients.len(),
            "Input loaded"
        );

        let dispatcher = Dispatcher::new(self.config.pool_size, self.config.queue_capacity);
        let outcome = dispatcher
            .dispatch(clients, catalog, shutdown)
            .instrument(info_span!("dispatch"))
            .await?;

        let actions = outcome.actions();
        write_agents(&self.config.output_path, &actions)?;

        let summary = RunSummary {
            clients: outcome.reports.len(),
            actions: actions.len(),
            grand_total: outcome.grand_total(),
            interrupted: outcome.interrupted,
        };
        info!(?summary, "Run complete");
        Ok(summary)
    }
}
