//! # Restaurant Orders
//!
//! Reads `resources/Menu.json` and `resources/Clients.json`, processes every client's
//! order on a pool of four workers and writes the cook's actions to
//! `resources/agents.json`.

use restaurant_orders::config::RestaurantConfig;
use restaurant_orders::lifecycle::{setup_tracing, Restaurant};
use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    info!("Welcome to the restaurant :)");

    let restaurant = Restaurant::new(RestaurantConfig::default());
    match restaurant.run().await {
        Ok(summary) => {
            if summary.interrupted {
                warn!("Run was interrupted, agents file may be incomplete");
            }
            info!(
                clients = summary.clients,
                actions = summary.actions,
                grand_total = summary.grand_total,
                "Application completed successfully"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
