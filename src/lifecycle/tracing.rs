//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`, defaulting to `info` so per-client progress is visible out of the box.
//!
//! ```bash
//! # Default: per-client progress, totals and timings
//! cargo run
//!
//! # Every ordered item and worker start/stop
//! RUST_LOG=debug cargo run
//! ```
//!
//! Each client is processed inside a `client` span, so interleaved lines from
//! different workers stay attributable:
//!
//! ```text
//! INFO client{name=Alice}: Processing order
//! INFO client{name=Alice}: Dish found, cook is preparing it item=Soup price=150.0
//! INFO client{name=Alice}: Dish not found item=Bread
//! INFO client{name=Alice}: Order processed total=150.0 elapsed_ms=0
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
