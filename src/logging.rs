//! Diagnostics go to a file: the terminal itself belongs to the tour.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::TourError;

pub const DEFAULT_FILTER: &str = "stellar_x=info";

/// Installs a plain-text subscriber appending to `path`. `RUST_LOG` overrides
/// the default filter.
pub fn init_file_logging(path: &Path) -> Result<(), TourError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TourError::Logging(e.to_string()))
}
