//! Catalog and order loading.
//!
//! Both input files are JSON arrays. Any failure to read or parse one is a
//! [`RestaurantError::DataLoad`] carrying the offending path.

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{DataError, RestaurantError};
use crate::model::{Catalog, Client, MenuItem};

/// Reads `path` and parses it as a JSON array of `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, RestaurantError> {
    debug!(path = %path.display(), "Loading");
    let load_error = |source: DataError| RestaurantError::DataLoad {
        path: path.to_path_buf(),
        source,
    };

    let contents = std::fs::read_to_string(path).map_err(|e| load_error(e.into()))?;
    let records: Vec<T> = serde_json::from_str(&contents).map_err(|e| load_error(e.into()))?;

    info!(path = %path.display(), count = records.len(), "Loaded");
    Ok(records)
}

/// Loads the menu file into a [`Catalog`].
pub fn load_menu(path: &Path) -> Result<Catalog, RestaurantError> {
    load_json::<MenuItem>(path).map(Catalog::from)
}

/// Loads the clients file.
pub fn load_clients(path: &Path) -> Result<Vec<Client>, RestaurantError> {
    load_json::<Client>(path)
}
