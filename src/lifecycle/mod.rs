//! Run orchestration and observability setup.
//!
//! - [`Restaurant`] - Loads the inputs, dispatches clients, writes the report
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod restaurant;
pub mod tracing;

pub use self::restaurant::*;
pub use self::tracing::*;
