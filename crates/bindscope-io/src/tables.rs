//! CSV tables and column access on polars frames.
use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const RESULTS_FILE: &str = "result_summary.csv";
pub const METRICS_FILE: &str = "destress_binder_with_egfr.csv";
pub const STRUCTURES_DIR: &str = "structures";
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Input layout of one experiment campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsDir {
    root: PathBuf,
}

impl ResultsDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ResultsDir { root: root.into() }
    }
    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn results_file(&self) -> PathBuf {
        self.root.join(RESULTS_FILE)
    }
    pub fn metrics_file(&self) -> PathBuf {
        self.root.join(METRICS_FILE)
    }
    pub fn structures_dir(&self) -> PathBuf {
        self.root.join(STRUCTURES_DIR)
    }
}

impl Default for ResultsDir {
    fn default() -> Self {
        ResultsDir::new(DEFAULT_RESULTS_DIR)
    }
}

/// Tokens read as missing values in every column, besides empty fields.
pub const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let null_values = NullValues::AllColumns(NA_TOKENS.iter().map(|t| (*t).into()).collect());
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(null_values)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .with_context(|| format!("failed to read CSV {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = df.height(), columns = df.width(), "read table");
    Ok(df)
}

pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("failed to write CSV {}", path.display()))?;
    Ok(())
}

/// A column rendered as strings; nulls stay `None`.
pub fn string_values(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(column)
        .with_context(|| format!("missing column `{column}`"))?
        .as_materialized_series()
        .cast(&DataType::String)
        .with_context(|| format!("column `{column}` cannot be read as text"))?;
    let values = series
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect();
    Ok(values)
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Boolean
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Every numeric or boolean column as `f64`, in frame order.
pub fn numeric_columns(df: &DataFrame) -> Result<Vec<(String, Vec<Option<f64>>)>> {
    df.get_columns()
        .iter()
        .filter(|column| is_numeric(column.dtype()))
        .map(|column| -> Result<(String, Vec<Option<f64>>)> {
            let series = column
                .as_materialized_series()
                .cast(&DataType::Float64)
                .with_context(|| format!("column `{}` is not numeric", column.name()))?;
            let values = series.f64()?.into_iter().collect();
            Ok((column.name().to_string(), values))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindscope_test_data::TestFile;

    #[test]
    fn test_read_results() {
        let (path, _temp) = TestFile::result_summary().create_temp().unwrap();
        let df = read_csv(Path::new(&path)).unwrap();
        assert_eq!(df.height(), 5);
        assert_eq!(
            df.get_column_names()
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>(),
            ["name", "expression", "binding_strength", "kd", "design_models"]
        );
    }

    #[test]
    fn test_missing_file() {
        let err = read_csv(Path::new("no/such/table.csv")).unwrap_err();
        assert!(err.to_string().contains("table.csv"));
    }

    #[test]
    fn test_string_and_numeric_columns() {
        let (path, _temp) = TestFile::result_summary().create_temp().unwrap();
        let df = read_csv(Path::new(&path)).unwrap();

        let expression = string_values(&df, "expression").unwrap();
        assert_eq!(expression[0].as_deref(), Some("high"));
        assert_eq!(expression[3], None);

        let numeric = numeric_columns(&df).unwrap();
        assert_eq!(numeric.len(), 1);
        assert_eq!(numeric[0].0, "kd");
        assert_eq!(numeric[0].1[0], Some(1.5e-9));

        assert!(string_values(&df, "absent").is_err());
    }

    #[test]
    fn test_na_tokens_are_missing() {
        let (path, _temp) = TestFile::result_summary_na().create_temp().unwrap();
        let df = read_csv(Path::new(&path)).unwrap();

        let expression = string_values(&df, "expression").unwrap();
        assert_eq!(
            expression,
            vec![None, Some("high".to_string()), None, Some("low".to_string()), None]
        );
        let binding = string_values(&df, "binding_strength").unwrap();
        assert_eq!(binding[3], None);

        // `kd` stays numeric with `NaN` and `null` read as missing
        let numeric = numeric_columns(&df).unwrap();
        assert_eq!(numeric.len(), 1);
        assert_eq!(numeric[0].0, "kd");
        assert_eq!(
            numeric[0].1,
            vec![Some(1.0e-9), Some(2.0e-7), None, None, Some(8.0e-7)]
        );
    }

    #[test]
    fn test_write_csv() {
        let (path, _temp) = TestFile::result_summary().create_temp().unwrap();
        let mut df = read_csv(Path::new(&path)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("designs.csv");

        write_csv(&mut df, &out).unwrap();
        let written = read_csv(&out).unwrap();
        assert_eq!(written.shape(), df.shape());
        assert!(write_csv(&mut df, &dir.path().join("missing/designs.csv")).is_err());
    }

    #[test]
    fn test_results_dir_layout() {
        let dir = ResultsDir::default();
        assert_eq!(dir.results_file(), Path::new("results/result_summary.csv"));
        assert_eq!(dir.structures_dir(), Path::new("results/structures"));
    }
}
