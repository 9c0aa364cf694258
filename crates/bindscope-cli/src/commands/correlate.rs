use super::{file_stem, prepare_out_dir};
use anyhow::{Context, Result};
use bindscope_io::{build_design_table, write_csv, AnalysisConfig};
use bindscope_plots::{BarChart, Chart, Heatmap};
use std::path::Path;

pub fn execute(config: &AnalysisConfig, out_dir: &Path, table_out: Option<&Path>) -> Result<()> {
    let mut table = build_design_table(config)?;
    prepare_out_dir(out_dir)?;

    if let Some(path) = table_out {
        write_csv(&mut table.frame, path)?;
        tracing::info!(path = %path.display(), "wrote design table");
    }

    let matrix = table.correlation(config.method)?;
    tracing::info!(method = %config.method, features = matrix.size(), "correlation matrix");
    Heatmap::new(&matrix, "Correlation Matrix Heatmap")
        .save(&out_dir.join("correlation_heatmap.svg"))?;

    let target = &config.target;
    let bars = matrix.abs_target(target).with_context(|| {
        format!(
            "target `{target}` is not a numeric column; numeric columns are [{}]",
            matrix.names().join(", ")
        )
    })?;
    BarChart::new(format!("Correlation With {}", target.to_uppercase()), bars)
        .with_axis_titles("Features", "Absolute Corelation")
        .save(&out_dir.join(format!("correlation_with_{}.svg", file_stem(target))))?;

    Ok(())
}
