//! Run configuration.
//!
//! There are no command-line flags or environment overrides: [`RestaurantConfig::default`]
//! holds the fixed paths and pool size used by the binary. Tests build their own config
//! with [`RestaurantConfig::in_dir`].

use std::path::{Path, PathBuf};

/// Directory holding the input and output files, relative to the working directory.
pub const RESOURCES_DIR: &str = "resources";
pub const MENU_FILE: &str = "Menu.json";
pub const CLIENTS_FILE: &str = "Clients.json";
pub const AGENTS_FILE: &str = "agents.json";

/// Number of workers processing clients in parallel.
pub const DEFAULT_POOL_SIZE: usize = 4;
/// Pending tasks the pool queue holds before `submit` waits for a free slot.
pub const DEFAULT_QUEUE_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct RestaurantConfig {
    pub menu_path: PathBuf,
    pub clients_path: PathBuf,
    pub output_path: PathBuf,
    pub pool_size: usize,
    pub queue_capacity: usize,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self::in_dir(RESOURCES_DIR)
    }
}

impl RestaurantConfig {
    /// Config with the standard file names placed under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            menu_path: dir.join(MENU_FILE),
            clients_path: dir.join(CLIENTS_FILE),
            output_path: dir.join(AGENTS_FILE),
            pool_size: DEFAULT_POOL_SIZE,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }
}
