//! Grouping designs by the generative method(s) that produced them.
//!
//! `design_models` holds a list literal such as `['RFdiffusion', 'BindCraft']`.
//! A design counts once for every model in its list.
use crate::tables::string_values;
use anyhow::Result;
use polars::prelude::*;
use std::collections::BTreeMap;

pub const MODELS_COLUMN: &str = "design_models";
pub const MODEL_COLUMN: &str = "design_model";
pub const BINDING_STRENGTH_COLUMN: &str = "binding_strength";

/// Parse a list literal of quoted strings.
///
/// Anything that is not a well-formed list of single or double quoted strings
/// yields an empty list.
pub fn parse_model_list(text: &str) -> Vec<String> {
    try_parse_model_list(text).unwrap_or_default()
}

fn try_parse_model_list(text: &str) -> Option<Vec<String>> {
    let inner = text.trim().strip_prefix('[')?.strip_suffix(']')?;
    let mut models = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let quote = match chars.next() {
            None => break,
            Some(q @ ('\'' | '"')) => q,
            Some(_) => return None,
        };
        let mut model = String::new();
        loop {
            match chars.next()? {
                '\\' => model.push(chars.next()?),
                c if c == quote => break,
                c => model.push(c),
            }
        }
        models.push(model);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(_) => return None,
        }
    }
    Some(models)
}

/// One row per (design, model) with the model in `design_model`.
/// Designs without any model are dropped.
pub fn explode_models(df: &DataFrame) -> Result<DataFrame> {
    let mut rows: Vec<IdxSize> = Vec::new();
    let mut models: Vec<String> = Vec::new();
    for (row, text) in string_values(df, MODELS_COLUMN)?.iter().enumerate() {
        for model in text.as_deref().map(parse_model_list).unwrap_or_default() {
            if model.is_empty() {
                continue;
            }
            rows.push(row as IdxSize);
            models.push(model);
        }
    }

    let mut exploded = df.take(&IdxCa::from_vec("row".into(), rows))?;
    exploded.with_column(Series::new(MODEL_COLUMN.into(), models))?;
    Ok(exploded)
}

/// Rows of an exploded frame per model, in order of first appearance.
fn rows_by_model(exploded: &DataFrame) -> Result<Vec<(String, Vec<IdxSize>)>> {
    let mut groups: Vec<(String, Vec<IdxSize>)> = Vec::new();
    for (row, model) in string_values(exploded, MODEL_COLUMN)?.into_iter().enumerate() {
        let Some(model) = model else {
            continue;
        };
        match groups.iter_mut().find(|(name, _)| *name == model) {
            Some((_, rows)) => rows.push(row as IdxSize),
            None => groups.push((model, vec![row as IdxSize])),
        }
    }
    Ok(groups)
}

/// Designs of each model as separate frames, in order of first appearance.
pub fn split_by_model(df: &DataFrame) -> Result<Vec<(String, DataFrame)>> {
    let exploded = explode_models(df)?;
    rows_by_model(&exploded)?
        .into_iter()
        .map(|(model, rows)| -> Result<(String, DataFrame)> {
            let frame = exploded.take(&IdxCa::from_vec("row".into(), rows))?;
            Ok((model, frame))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub model: String,
    pub category: String,
    pub count: usize,
    pub percent: f64,
}

/// Count designs per (model, category value) for `category_column`.
///
/// Rows missing either `binding_strength` or `expression` are left out of
/// every count. Results are sorted by model then category, and `percent` is
/// the share of the model's total.
pub fn category_counts(df: &DataFrame, category_column: &str) -> Result<Vec<CategoryCount>> {
    let exploded = explode_models(df)?;
    let binding = string_values(&exploded, BINDING_STRENGTH_COLUMN)?;
    let expression = string_values(&exploded, crate::expression::EXPRESSION_COLUMN)?;
    let categories = string_values(&exploded, category_column)?;
    let models = string_values(&exploded, MODEL_COLUMN)?;

    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
    for row in 0..exploded.height() {
        if binding[row].is_none() || expression[row].is_none() {
            continue;
        }
        if let (Some(model), Some(category)) = (&models[row], &categories[row]) {
            *counts.entry((model.clone(), category.clone())).or_default() += 1;
        }
    }

    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for ((model, _), count) in &counts {
        *totals.entry(model.as_str()).or_default() += count;
    }

    Ok(counts
        .iter()
        .map(|((model, category), &count)| CategoryCount {
            model: model.clone(),
            category: category.clone(),
            count,
            percent: 100.0 * count as f64 / totals[model.as_str()] as f64,
        })
        .collect())
}
