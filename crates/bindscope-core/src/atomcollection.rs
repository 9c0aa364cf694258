use crate::residue::{ResidueAtoms, ResidueIter};
use crate::selection::{AtomSelector, Selection};
use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use pdbtbx::{Element, ReadOptions, StrictnessLevel};
use std::path::Path;

/// Columnar atom storage for a single structure model.
///
/// Every column has one entry per atom; atoms of a residue are contiguous.
#[derive(Debug, Default)]
pub struct AtomCollection {
    coords: Vec<[f32; 3]>,
    res_ids: Vec<i32>,
    // empty when the residue has no insertion code
    ins_codes: Vec<String>,
    res_names: Vec<String>,
    is_hetero: Vec<bool>,
    elements: Vec<Element>,
    atom_names: Vec<String>,
    chain_ids: Vec<String>,
}

impl AtomCollection {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        coords: Vec<[f32; 3]>,
        res_ids: Vec<i32>,
        ins_codes: Vec<String>,
        res_names: Vec<String>,
        is_hetero: Vec<bool>,
        elements: Vec<Element>,
        atom_names: Vec<String>,
        chain_ids: Vec<String>,
    ) -> Self {
        AtomCollection {
            coords,
            res_ids,
            ins_codes,
            res_names,
            is_hetero,
            elements,
            atom_names,
            chain_ids,
        }
    }

    /// Read a PDB or mmCIF file. The format is picked from the extension.
    ///
    /// Parsing is loose: design pipelines write PDBs without most header
    /// records, and the resulting warnings are only traced.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .with_context(|| format!("structure path is not valid UTF-8: {path:?}"))?;

        let (pdb, warnings) = ReadOptions::default()
            .set_level(StrictnessLevel::Loose)
            .read(path_str)
            .map_err(|errors| {
                anyhow!(
                    "failed to parse structure {}: {}",
                    path.display(),
                    errors.iter().map(|e| e.to_string()).join("; ")
                )
            })?;

        for warning in &warnings {
            tracing::trace!(path = %path.display(), "{}", warning);
        }
        Ok(AtomCollection::from(&pdb))
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
    pub fn coords(&self) -> &[[f32; 3]] {
        &self.coords
    }
    pub fn coord(&self, idx: usize) -> &[f32; 3] {
        &self.coords[idx]
    }
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
    pub fn element(&self, idx: usize) -> &Element {
        &self.elements[idx]
    }
    pub fn atom_names(&self) -> &[String] {
        &self.atom_names
    }
    pub fn res_names(&self) -> &[String] {
        &self.res_names
    }
    pub fn res_name(&self, idx: usize) -> &str {
        &self.res_names[idx]
    }
    pub fn res_id(&self, idx: usize) -> i32 {
        self.res_ids[idx]
    }
    pub fn insertion_code(&self, idx: usize) -> &str {
        &self.ins_codes[idx]
    }
    pub fn chain_id(&self, idx: usize) -> &str {
        &self.chain_ids[idx]
    }
    pub fn is_hetero(&self, idx: usize) -> bool {
        self.is_hetero[idx]
    }

    /// Chain identifiers in order of first appearance.
    pub fn chain_ids(&self) -> Vec<&str> {
        self.chain_ids.iter().map(String::as_str).unique().collect()
    }

    fn residue_key(&self, idx: usize) -> (&str, i32, &str, &str) {
        (
            self.chain_id(idx),
            self.res_id(idx),
            self.insertion_code(idx),
            self.res_name(idx),
        )
    }

    /// Atom index where each residue begins, followed by `len()`.
    pub(crate) fn residue_bounds(&self) -> Vec<usize> {
        let mut bounds: Vec<usize> = std::iter::once(0)
            .chain((1..self.len()).filter(|&i| self.residue_key(i) != self.residue_key(i - 1)))
            .collect();
        if !self.is_empty() {
            bounds.push(self.len());
        }
        bounds
    }

    /// Residues in storage order.
    pub fn iter_residues_all(&self) -> ResidueIter<'_> {
        ResidueIter::new(self, self.residue_bounds())
    }

    /// Residues of one chain.
    pub fn iter_residues_chain(
        &self,
        chain_id: &str,
    ) -> impl Iterator<Item = ResidueAtoms<'_>> + '_ {
        let chain_id = chain_id.to_string();
        self.iter_residues_all()
            .filter(move |residue| residue.chain_id == chain_id)
    }

    pub fn select(&self) -> AtomSelector<'_> {
        AtomSelector::new(self)
    }

    pub fn select_by_chain(&self, chain_id: &str) -> Selection {
        self.select().chain(chain_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utilities::get_dimer;
    use crate::AtomCollection;
    use pdbtbx::Element;

    #[test]
    fn test_selection_api() {
        let ac = get_dimer();
        let nitrogens = ac.select().chain("B").element(Element::N).collect();
        assert_eq!(nitrogens.len(), 3);

        let glycine = ac.select().chain("A").residue("GLY").collect();
        assert_eq!(glycine.indices(), &[0, 1]);

        assert_eq!(ac.select_by_chain("B").len(), 6);
        assert!(ac.select_by_chain("Z").is_empty());
    }

    #[test]
    fn test_residue_iterator() {
        let ac = get_dimer();
        assert_eq!(ac.len(), 10);
        assert_eq!(ac.residue_bounds(), vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(ac.iter_residues_all().count(), 5);
        assert_eq!(ac.iter_residues_chain("A").count(), 2);
        assert_eq!(ac.iter_residues_chain("B").count(), 3);

        let last = ac.iter_residues_all().last().unwrap();
        assert_eq!(last.res_name, "LYS");
        assert_eq!(last.atom_count(), 2);
    }

    #[test]
    fn test_chain_ids() {
        let ac = get_dimer();
        assert_eq!(ac.chain_ids(), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_collection() {
        let ac = AtomCollection::default();
        assert!(ac.is_empty());
        assert_eq!(ac.iter_residues_all().count(), 0);
        assert!(ac.chain_ids().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = AtomCollection::load("does/not/exist.pdb").unwrap_err();
        assert!(err.to_string().contains("exist.pdb"));
    }
}
