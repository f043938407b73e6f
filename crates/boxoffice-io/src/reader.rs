//! Loader options and common error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default dataset file name, looked up in the working directory
pub const DEFAULT_DATASET: &str = "dataset.csv";

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// How the dataset file is laid out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Field delimiter
    pub delimiter: u8,
    /// Whether the first line is a header to skip
    pub has_header: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
        }
    }
}

impl LoadOptions {
    /// Options with a custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Options with or without a header line
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}
