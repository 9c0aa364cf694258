//! bindscope-plots
//!
//! Static SVG charts for the design analysis.
//!
//! - correlation heatmaps
//! - single-series and grouped/stacked bar charts
//!
mod bar;
mod chart;
pub mod colors;
mod grouped;
mod heatmap;

pub use bar::BarChart;
pub use chart::Chart;
pub use grouped::{BarMode, GroupedBarChart};
pub use heatmap::Heatmap;
