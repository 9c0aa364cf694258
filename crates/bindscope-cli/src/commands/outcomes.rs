use super::prepare_out_dir;
use anyhow::Result;
use bindscope_io::expression::EXPRESSION_COLUMN;
use bindscope_io::models::{category_counts, BINDING_STRENGTH_COLUMN};
use bindscope_io::{read_csv, CategoryCount, ResultsDir};
use bindscope_plots::{BarMode, Chart, GroupedBarChart};
use std::path::Path;

struct Outcome {
    column: &'static str,
    label: &'static str,
    file_stem: &'static str,
}

const OUTCOMES: [Outcome; 2] = [
    Outcome {
        column: BINDING_STRENGTH_COLUMN,
        label: "Binding Strength",
        file_stem: "binding_strength_per_model",
    },
    Outcome {
        column: EXPRESSION_COLUMN,
        label: "Expression Level",
        file_stem: "expression_per_model",
    },
];

pub fn execute(results_dir: &Path, out_dir: &Path) -> Result<()> {
    let inputs = ResultsDir::new(results_dir);
    let results = read_csv(&inputs.results_file())?;
    prepare_out_dir(out_dir)?;

    for outcome in &OUTCOMES {
        let counts = category_counts(&results, outcome.column)?;
        tracing::debug!(column = outcome.column, groups = counts.len(), "counted outcomes");

        GroupedBarChart::from_triples(
            format!("{} per Design Model", outcome.label),
            triples(&counts, |c| c.count as f64),
        )
        .with_axis_titles("Design Model", "Count")
        .with_legend_title(outcome.column)
        .save(&out_dir.join(format!("{}.svg", outcome.file_stem)))?;

        GroupedBarChart::from_triples(
            format!("{} Distribution per Design Model (Normalized)", outcome.label),
            triples(&counts, |c| c.percent),
        )
        .with_mode(BarMode::Relative)
        .with_axis_titles("Design Model", "Percentage")
        .with_legend_title(outcome.column)
        .with_y_suffix("%")
        .save(&out_dir.join(format!("{}_normalized.svg", outcome.file_stem)))?;
    }
    Ok(())
}

fn triples<'a>(
    counts: &'a [CategoryCount],
    value: impl Fn(&CategoryCount) -> f64 + 'a,
) -> impl Iterator<Item = (&'a str, &'a str, f64)> + 'a {
    counts
        .iter()
        .map(move |c| (c.model.as_str(), c.category.as_str(), value(c)))
}
