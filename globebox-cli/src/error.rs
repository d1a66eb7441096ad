//! CLI error type.

use std::path::PathBuf;

use globebox::{ConfigError, CoordError};
use thiserror::Error;

/// Errors surfaced to the user by the `globebox` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A coordinate in the arguments or trace was malformed or out of range.
    #[error(transparent)]
    Coord(#[from] CoordError),

    /// The config file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The trace file could not be read.
    #[error("Failed to read trace {}: {source}", .path.display())]
    ReadTrace {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A trace or report could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
