//! bindscope-io
//!
//! - load result and metric tables (CSV) into polars frames
//! - derive expression and interface-contact columns
//! - join structure metrics and group designs by model
//!
mod design;
pub mod expression;
pub mod metrics;
pub mod models;
pub mod structures;
pub mod tables;

pub use design::{build_design_table, AnalysisConfig, DesignTable, DEFAULT_TARGET};
pub use models::CategoryCount;
pub use structures::ContactOutcome;
pub use tables::{read_csv, write_csv, ResultsDir};
