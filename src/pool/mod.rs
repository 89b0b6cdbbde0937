//! Fixed-size worker pool.
//!
//! # Main Components
//!
//! - [`PoolTask`] - Trait for units of work the pool can run
//! - [`WorkerPool`] - A fixed set of workers draining a shared queue
//! - [`TaskHandle`] - Receives the output of one submitted task
//! - [`PoolError`] - Pool failures (closed queue, failed workers)

pub mod core;
pub mod error;

pub use self::core::*;
pub use self::error::*;
