//! boxoffice-core - Analysis workflow for the movie dataset
//!
//! This crate sits between the loaded [`MovieDataset`] and whatever front-end
//! shows results to the user.
//!
//! # Key Components
//!
//! - **Config**: TOML configuration for the dataset location, chart bin
//!   widths and display unit
//! - **Report**: one formatted text block per statistics menu entry
//! - **Charts**: chart-ready data (histogram bins, box summaries, shares)
//! - **Menu**: the main/statistics/visualisation state machine, driven by
//!   any `BufRead` input and `Write` output
//! - **Summary**: a serializable snapshot of every statistic
//!
//! Rendering charts is left to a [`ChartPresenter`] supplied by the caller.

pub mod charts;
pub mod config;
pub mod error;
pub mod format;
pub mod menu;
pub mod report;
pub mod summary;

pub use boxoffice_io::MovieDataset;
pub use boxoffice_stats::{BoxSummary, StatsError};
pub use charts::*;
pub use config::*;
pub use error::*;
pub use menu::*;
pub use report::*;
pub use summary::*;
