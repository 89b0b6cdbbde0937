//! # Restaurant Orders
//!
//! > **A batch order processor for a small restaurant kitchen.**
//!
//! The crate reads a menu and a list of client orders from JSON, matches every ordered
//! dish against the menu on a fixed-size worker pool, and writes the cook's actions to
//! a pretty-printed JSON file.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### 1. Pure Matching Core
//! [`processor::process_order`] is a plain function of a client and the catalog. It
//! narrates through `tracing` instead of printing, so it can be tested without
//! capturing output.
//!
//! ### 2. Explicit Errors
//! Loading and writing return [`RestaurantError`](error::RestaurantError) values that
//! name the offending file. `main` decides what to do with them.
//!
//! ### 3. Concurrency Model
//! A [`WorkerPool`](pool::WorkerPool) runs a fixed number of workers over a shared
//! queue. Nothing mutable is shared: each task returns its own
//! [`OrderReport`](processor::OrderReport) over a oneshot channel, and the
//! [`Dispatcher`](dispatcher::Dispatcher) merges reports in submission order after the
//! join. The output file is therefore deterministic.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - `MenuItem`, `Catalog`, `Client`, `AgentAction`
//! - [`loader`] - Reads the menu and clients files
//! - [`processor`] - Matches one client's order, computes the total
//! - [`pool`] - Generic fixed-size worker pool
//! - [`dispatcher`] - Fans clients out over the pool and joins
//! - [`report`] - Writes the agents file
//! - [`lifecycle`] - The [`Restaurant`](lifecycle::Restaurant) orchestrator and tracing setup
//! - [`config`] - Fixed paths and pool size
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Reads resources/Menu.json and resources/Clients.json
//! cargo run
//!
//! # Per-item logs
//! RUST_LOG=debug cargo run
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod lifecycle;
pub mod loader;
pub mod model;
pub mod pool;
pub mod processor;
pub mod report;
