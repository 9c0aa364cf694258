//! bindscope-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//!
//! Individual files are represented as `TestFile` objects which package the raw
//! bytes and create temporary files for programs to operate on. `TestResults`
//! lays out a complete results directory (summary table, metrics table and
//! structures) in a temporary directory.
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile, TempDir};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use bindscope_test_data::TestFile;
/// let (prot_file, _temp) = TestFile::dimer_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Two-chain toy complex.
    ///
    /// Interface contacts between A and B: 2 at 4.5 Å, 1 at 3.5 Å.
    pub fn dimer_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/design_01.pdb"),
            suffix: "pdb",
        }
    }
    /// Two-chain toy complex with a single contact at 4.2 Å.
    pub fn dimer_02() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/design_02.pdb"),
            suffix: "pdb",
        }
    }
    /// Two identical models of a dimer whose chain A holds residues `52` and
    /// `52A`. The first model alone has 6 atoms, 3 residues and 1 contact.
    pub fn ensemble_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/ensemble_01.pdb"),
            suffix: "pdb",
        }
    }
    /// `result_summary.csv` with five designs, two of which have structures.
    pub fn result_summary() -> Self {
        Self {
            filebinary: include_bytes!("../data/results/result_summary.csv"),
            suffix: "csv",
        }
    }
    /// DE-STRESS metrics keyed by `design_name`.
    pub fn destress_metrics() -> Self {
        Self {
            filebinary: include_bytes!("../data/results/destress_binder_with_egfr.csv"),
            suffix: "csv",
        }
    }

    /// Results table spelling missing values as `NA`, `N/A`, `NaN`, `null`,
    /// `<NA>` and `None`.
    pub fn result_summary_na() -> Self {
        Self {
            filebinary: include_bytes!("../data/results/result_summary_na.csv"),
            suffix: "csv",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }

    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.filebinary)
    }
}

/// A results directory laid out the way the analysis expects it:
///
/// ```text
/// <root>/result_summary.csv
/// <root>/destress_binder_with_egfr.csv
/// <root>/structures/design_01.pdb
/// <root>/structures/design_02.pdb
/// ```
///
/// `design_03`, `design_04` and `design_05` intentionally have no structure.
pub struct TestResults {
    root: PathBuf,
    _dir: TempDir,
}

impl TestResults {
    pub fn create_temp() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let root = dir.path().join("results");
        let structures = root.join("structures");
        fs::create_dir_all(&structures)?;

        TestFile::result_summary().write_to(&root.join("result_summary.csv"))?;
        TestFile::destress_metrics().write_to(&root.join("destress_binder_with_egfr.csv"))?;
        TestFile::dimer_01().write_to(&structures.join("design_01.pdb"))?;
        TestFile::dimer_02().write_to(&structures.join("design_02.pdb"))?;

        Ok(Self { root, _dir: dir })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn structures(&self) -> PathBuf {
        self.root.join("structures")
    }
}
