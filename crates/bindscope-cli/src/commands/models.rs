use super::{prepare_out_dir, FileStems};
use anyhow::Result;
use bindscope_core::{CorrelationMatrix, Method};
use bindscope_io::models::split_by_model;
use bindscope_io::tables::numeric_columns;
use bindscope_io::{read_csv, ResultsDir};
use bindscope_plots::{Chart, Heatmap};
use std::path::Path;

pub fn execute(results_dir: &Path, out_dir: &Path, method: Method) -> Result<()> {
    let inputs = ResultsDir::new(results_dir);
    let results = read_csv(&inputs.results_file())?;
    prepare_out_dir(out_dir)?;

    let mut stems = FileStems::default();
    for (model, frame) in split_by_model(&results)? {
        if frame.height() < 2 {
            tracing::warn!(model = %model, designs = frame.height(), "skipping model: not enough data");
            continue;
        }
        let matrix = CorrelationMatrix::compute(&numeric_columns(&frame)?, method);
        Heatmap::new(&matrix, format!("Correlation Matrix for {model}"))
            .save(&out_dir.join(format!("correlation_{}.svg", stems.claim(&model))))?;
    }
    Ok(())
}
