//! Error types for boxoffice-core

use boxoffice_io::IoError;
use boxoffice_stats::StatsError;
use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for boxoffice operations
#[derive(Error, Debug)]
pub enum BoxofficeError {
    /// Dataset loading errors
    #[error("Failed to load dataset: {0}")]
    Dataset(#[from] IoError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Statistic could not be computed
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for boxoffice operations
pub type BoxofficeResult<T> = Result<T, BoxofficeError>;
