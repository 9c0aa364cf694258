//! Single-pass construction of the per-design table.
use crate::expression::encode_expression;
use crate::metrics::join_metrics;
use crate::structures::{add_contacts, ContactOutcome};
use crate::tables::{numeric_columns, read_csv, ResultsDir, DEFAULT_RESULTS_DIR};
use anyhow::Result;
use bindscope_core::{CorrelationMatrix, Interface, Method};
use bon::Builder;
use polars::prelude::*;
use std::path::PathBuf;

pub const DEFAULT_TARGET: &str = "kd";

/// Settings for one analysis run.
///
/// ```ignore
/// let config = AnalysisConfig::builder()
///     .results_dir(PathBuf::from("results"))
///     .method(Method::Pearson)
///     .build();
/// ```
#[derive(Debug, Clone, Builder)]
pub struct AnalysisConfig {
    #[builder(default = PathBuf::from(DEFAULT_RESULTS_DIR))]
    pub results_dir: PathBuf,
    #[builder(default)]
    pub interface: Interface,
    #[builder(default)]
    pub method: Method,
    #[builder(default = DEFAULT_TARGET.to_string())]
    pub target: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig::builder().build()
    }
}

impl AnalysisConfig {
    pub fn inputs(&self) -> ResultsDir {
        ResultsDir::new(&self.results_dir)
    }
}

pub struct DesignTable {
    pub frame: DataFrame,
    pub contacts: Vec<ContactOutcome>,
}

impl DesignTable {
    pub fn numeric_columns(&self) -> Result<Vec<(String, Vec<Option<f64>>)>> {
        numeric_columns(&self.frame)
    }
    pub fn correlation(&self, method: Method) -> Result<CorrelationMatrix> {
        Ok(CorrelationMatrix::compute(&self.numeric_columns()?, method))
    }
    pub fn missing_structures(&self) -> usize {
        self.contacts
            .iter()
            .filter(|c| **c == ContactOutcome::MissingStructure)
            .count()
    }
}

/// Results table + expression encoding + contacts + joined metrics.
pub fn build_design_table(config: &AnalysisConfig) -> Result<DesignTable> {
    let inputs = config.inputs();

    let mut frame = read_csv(&inputs.results_file())?;
    encode_expression(&mut frame)?;
    let contacts = add_contacts(&mut frame, &inputs.structures_dir(), &config.interface)?;

    let metrics = read_csv(&inputs.metrics_file())?;
    let frame = join_metrics(&frame, &metrics)?;

    let table = DesignTable { frame, contacts };
    tracing::info!(
        designs = table.frame.height(),
        columns = table.frame.width(),
        missing_structures = table.missing_structures(),
        "design table ready"
    );
    Ok(table)
}
