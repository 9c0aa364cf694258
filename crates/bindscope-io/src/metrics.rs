//! Joins structure-quality metrics (DE-STRESS export) onto the design table.
use crate::structures::NAME_COLUMN;
use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::HashSet;

pub const METRICS_KEY: &str = "design_name";

/// Metric columns that the design table does not already carry.
pub fn new_metric_columns(df: &DataFrame, metrics: &DataFrame) -> Vec<PlSmallStr> {
    let existing: HashSet<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    metrics
        .get_column_names()
        .into_iter()
        .filter(|name| name.as_str() != METRICS_KEY && !existing.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Left join of the new metric columns on `name == design_name`.
///
/// Designs without a metrics row get nulls; metric rows without a design are
/// dropped.
pub fn join_metrics(df: &DataFrame, metrics: &DataFrame) -> Result<DataFrame> {
    metrics
        .column(METRICS_KEY)
        .with_context(|| format!("metrics table has no `{METRICS_KEY}` column"))?;
    df.column(NAME_COLUMN)
        .with_context(|| format!("design table has no `{NAME_COLUMN}` column"))?;

    let new_columns = new_metric_columns(df, metrics);
    tracing::debug!(columns = ?new_columns, "joining metric columns");
    if new_columns.is_empty() {
        return Ok(df.clone());
    }

    let mut selection = vec![PlSmallStr::from(METRICS_KEY)];
    selection.extend(new_columns);
    let subset = metrics.select(selection)?;

    let joined = df
        .left_join(&subset, [NAME_COLUMN], [METRICS_KEY])
        .context("failed to join metrics on design name")?;
    Ok(joined)
}
