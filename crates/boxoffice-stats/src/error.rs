//! Error types for statistical computations

use thiserror::Error;

/// Errors that can occur while computing a statistic
///
/// All variants are recoverable: callers abort the current analysis and
/// carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("statistic is undefined for empty input")]
    EmptyInput,

    #[error("need at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("degenerate distribution: division by zero")]
    DegenerateDistribution,
}

impl StatsError {
    /// True for the division-by-zero class of failures
    /// (`InsufficientData` and `DegenerateDistribution`).
    pub fn is_division_by_zero(&self) -> bool {
        matches!(
            self,
            StatsError::InsufficientData { .. } | StatsError::DegenerateDistribution
        )
    }
}

/// Result type for statistical computations
pub type StatsResult<T> = Result<T, StatsError>;
