//! Pure data structures (DTOs) read from and written to the JSON files.

pub mod agent;
pub mod client;
pub mod menu;

pub use agent::*;
pub use client::*;
pub use menu::*;
