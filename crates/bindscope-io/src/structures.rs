use crate::tables::string_values;
use anyhow::{Context, Result};
use bindscope_core::{AtomCollection, Interface};
use polars::prelude::*;
use std::path::{Path, PathBuf};

pub const CONTACTS_COLUMN: &str = "contacts";
pub const NAME_COLUMN: &str = "name";
/// Recorded in place of a contact count when a design has no structure file.
pub const MISSING_STRUCTURE: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Counted(usize),
    MissingStructure,
}

impl ContactOutcome {
    pub fn as_column_value(&self) -> i64 {
        match self {
            ContactOutcome::Counted(n) => *n as i64,
            ContactOutcome::MissingStructure => MISSING_STRUCTURE,
        }
    }
}

pub fn structure_path(structures_dir: &Path, name: &str) -> PathBuf {
    structures_dir.join(format!("{name}.pdb"))
}

/// Interface contacts of one design, or `MissingStructure` when
/// `<structures_dir>/<name>.pdb` does not exist.
pub fn design_contacts(
    structures_dir: &Path,
    name: &str,
    interface: &Interface,
) -> Result<ContactOutcome> {
    let path = structure_path(structures_dir, name);
    tracing::info!(path = %path.display(), "structure");
    if !path.exists() {
        tracing::info!(design = name, "skipped");
        return Ok(ContactOutcome::MissingStructure);
    }

    let structure = AtomCollection::load(&path)?;
    let contacts = structure
        .interface_contacts(interface)
        .with_context(|| format!("interface contacts for {}", path.display()))?;
    Ok(ContactOutcome::Counted(contacts))
}

/// Append the `contacts` column, one entry per design in `name` order.
pub fn add_contacts(
    df: &mut DataFrame,
    structures_dir: &Path,
    interface: &Interface,
) -> Result<Vec<ContactOutcome>> {
    let outcomes = string_values(df, NAME_COLUMN)?
        .into_iter()
        .enumerate()
        .map(|(row, name)| {
            let name = name.with_context(|| format!("design name missing in row {row}"))?;
            design_contacts(structures_dir, &name, interface)
        })
        .collect::<Result<Vec<_>>>()?;

    let values: Vec<i64> = outcomes.iter().map(ContactOutcome::as_column_value).collect();
    df.with_column(Series::new(CONTACTS_COLUMN.into(), values))?;
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::read_csv;
    use bindscope_test_data::TestResults;

    #[test]
    fn test_missing_structure_sentinel() {
        let results = TestResults::create_temp().unwrap();
        let outcome =
            design_contacts(&results.structures(), "design_03", &Interface::default()).unwrap();
        assert_eq!(outcome, ContactOutcome::MissingStructure);
        assert_eq!(outcome.as_column_value(), -1);
    }

    #[test]
    fn test_add_contacts() {
        let results = TestResults::create_temp().unwrap();
        let mut df = read_csv(&results.path().join("result_summary.csv")).unwrap();
        let outcomes = add_contacts(&mut df, &results.structures(), &Interface::default()).unwrap();

        assert_eq!(
            outcomes,
            vec![
                ContactOutcome::Counted(2),
                ContactOutcome::Counted(1),
                ContactOutcome::MissingStructure,
                ContactOutcome::MissingStructure,
                ContactOutcome::MissingStructure,
            ]
        );
        let contacts: Vec<Option<i64>> = df
            .column(CONTACTS_COLUMN)
            .unwrap()
            .as_materialized_series()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(
            contacts,
            vec![Some(2), Some(1), Some(-1), Some(-1), Some(-1)]
        );
    }

    #[test]
    fn test_cutoff_and_chain_errors() {
        let results = TestResults::create_temp().unwrap();
        let tight = Interface {
            cutoff: 3.5,
            ..Interface::default()
        };
        let outcome = design_contacts(&results.structures(), "design_01", &tight).unwrap();
        assert_eq!(outcome, ContactOutcome::Counted(1));

        let wrong_chain = Interface {
            chain_b: "Z".to_string(),
            ..Interface::default()
        };
        assert!(design_contacts(&results.structures(), "design_01", &wrong_chain).is_err());
    }
}
