//! Rank statistics and correlation matrices over nullable numeric columns.
mod correlation;
mod rank;

pub use correlation::{CorrelationMatrix, Method};
pub use rank::{pearson, rank_average, spearman};
