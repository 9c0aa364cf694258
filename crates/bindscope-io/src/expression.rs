use crate::tables::string_values;
use anyhow::Result;
use polars::prelude::*;

pub const EXPRESSION_COLUMN: &str = "expression";
pub const EXPRESSION_NUMERIC_COLUMN: &str = "expression_numeric";

/// Ordinal encoding of an expression category.
///
/// A missing value counts as `none`; unknown categories have no level.
pub fn expression_level(expression: Option<&str>) -> Option<i64> {
    match expression.unwrap_or("none") {
        "high" => Some(3),
        "medium" => Some(2),
        "low" => Some(1),
        "none" => Some(0),
        _ => None,
    }
}

/// Add `expression_numeric` next to the `expression` column values.
pub fn encode_expression(df: &mut DataFrame) -> Result<()> {
    let encoded: Vec<Option<i64>> = string_values(df, EXPRESSION_COLUMN)?
        .iter()
        .map(|value| {
            let level = expression_level(value.as_deref());
            if level.is_none() {
                tracing::warn!(expression = ?value, "unrecognized expression category");
            }
            level
        })
        .collect();

    df.with_column(Series::new(EXPRESSION_NUMERIC_COLUMN.into(), encoded))?;
    Ok(())
}
