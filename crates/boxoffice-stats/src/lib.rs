//! boxoffice-stats - Statistics engine for the movie dataset
//!
//! This crate provides the pure computations behind every analysis:
//!
//! - **Descriptive**: mean, median, mode, range, interquartile range,
//!   sample standard deviation, skewness, Pearson correlation
//! - **Decade**: highest/lowest grossing decade, most/least frequent decade
//! - **Summary**: box plot summaries (quartiles, whiskers, mean)
//!
//! # Quartile convention
//!
//! `median` pivots on `floor(n / 2)` and `interquartile_range` splits the
//! sorted data around that same pivot: for odd `n` the pivot is dropped
//! from both halves, for even `n` it belongs to the upper half. This is the
//! dataset's established contract and differs from the interpolated
//! quartiles used by [`BoxSummary`].

pub mod decade;
pub mod descriptive;
pub mod error;
pub mod summary;

pub use decade::*;
pub use descriptive::*;
pub use error::*;
pub use summary::*;
