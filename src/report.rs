//! Writes the collected agent actions to the output file.

use std::path::Path;
use tracing::info;

use crate::error::{DataError, RestaurantError};
use crate::model::AgentAction;

/// Writes `actions` to `path` as a pretty-printed JSON array.
pub fn write_agents(path: &Path, actions: &[AgentAction]) -> Result<(), RestaurantError> {
    let write_error = |source: DataError| RestaurantError::DataWrite {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(actions).map_err(|e| write_error(e.into()))?;
    std::fs::write(path, json).map_err(|e| write_error(e.into()))?;

    info!(path = %path.display(), count = actions.len(), "Agents written");
    Ok(())
}
