//! TUI widgets

mod box_plot;
mod share;

pub use box_plot::BoxPlotWidget;
pub use share::ShareBreakdown;
