//! Matches one client's order against the catalog.
//!
//! [`process_order`] is the whole matching core. It only reads its inputs and
//! narrates through `tracing`, so it can be tested directly. [`OrderTask`] wraps it
//! for the [`WorkerPool`](crate::pool::WorkerPool).

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, info_span};

use crate::model::{AgentAction, Catalog, Client};
use crate::pool::PoolTask;

/// The outcome of processing one client.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReport {
    pub client: String,
    /// One action per ordered item, in order.
    pub actions: Vec<AgentAction>,
    pub total: f64,
    pub matched: usize,
    pub unavailable: usize,
    pub elapsed: Duration,
}

impl OrderReport {
    fn empty(client: &str, elapsed: Duration) -> Self {
        Self {
            client: client.to_string(),
            actions: Vec::new(),
            total: 0.0,
            matched: 0,
            unavailable: 0,
            elapsed,
        }
    }
}

/// Resolves every item of `client.order` against `catalog`.
///
/// Found items add their price to the total and produce a "Preparing" action;
/// missing items produce a "Reports ... unavailable" action and leave the total
/// unchanged.
pub fn process_order(client: &Client, catalog: &Catalog) -> OrderReport {
    let span = info_span!("client", name = %client.name);
    let _enter = span.enter();

    let started = Instant::now();
    info!("Processing order");

    if client.order.is_empty() {
        info!("Client has no orders");
        return OrderReport::empty(&client.name, started.elapsed());
    }

    let mut report = OrderReport::empty(&client.name, Duration::ZERO);
    report.actions.reserve(client.order.len());

    for item in &client.order {
        debug!(%item, "Processing order item");
        match catalog.find(item) {
            Some(dish) => {
                report.total += dish.price;
                report.matched += 1;
                info!(%item, price = dish.price, "Dish found, cook is preparing it");
                report.actions.push(AgentAction::preparing(item));
            }
            None => {
                report.unavailable += 1;
                info!(%item, "Dish not found");
                report.actions.push(AgentAction::unavailable(item));
            }
        }
    }

    report.elapsed = started.elapsed();
    info!(
        total = report.total,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Order processed"
    );
    report
}

/// Processes one client on a pool worker.
#[derive(Debug)]
pub struct OrderTask {
    client: Client,
    catalog: Arc<Catalog>,
}

impl OrderTask {
    pub fn new(client: Client, catalog: Arc<Catalog>) -> Self {
        Self { client, catalog }
    }
}

#[async_trait]
impl PoolTask for OrderTask {
    type Output = OrderReport;

    async fn execute(self) -> OrderReport {
        process_order(&self.client, &self.catalog)
    }
}
