use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::LoadError;
use crate::quiz::QuizError;

/// Error type for running the tour.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("failed to load tour data: {0}")]
    Load(#[from] LoadError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to set up logging: {0}")]
    Logging(String),
}
