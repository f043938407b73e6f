//! boxoffice-io - Loading the movie dataset
//!
//! Reads a delimited text file with a header line followed by rows of
//! `decade, title, budget, worldwide gross` (budget and gross in million
//! USD) into a [`MovieDataset`].
//!
//! # Design
//!
//! - A missing file is an error ([`IoError::FileNotFound`]); no partial
//!   dataset is ever returned.
//! - Rows that cannot be parsed are skipped and reported as
//!   [`SkippedRow`] diagnostics alongside the dataset.
//! - The dataset is immutable once built; per-decade groups are kept as
//!   one list of records ordered by label so counts and values cannot drift.

pub mod csv_reader;
pub mod dataset;
pub mod reader;

pub use csv_reader::*;
pub use dataset::*;
pub use reader::*;
