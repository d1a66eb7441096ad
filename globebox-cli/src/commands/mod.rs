//! Subcommand implementations.

pub mod rect;
pub mod replay;

use std::path::Path;

use globebox::TrackerConfig;

use crate::error::CliError;

/// Load the tracker config from `path`, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<TrackerConfig, CliError> {
    match path {
        Some(path) => Ok(TrackerConfig::load(path)?),
        None => Ok(TrackerConfig::default()),
    }
}
