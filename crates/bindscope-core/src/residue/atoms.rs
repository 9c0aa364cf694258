//! Atoms of a single residue: a contiguous index range of the parent
//! [`AtomCollection`] plus the identifiers those atoms share.
use crate::AtomCollection;
use std::ops::Range;

pub struct ResidueAtoms<'a> {
    pub atoms: Range<usize>,
    pub res_id: i32,
    pub insertion_code: &'a str,
    pub res_name: &'a str,
    pub chain_id: &'a str,
    parent: &'a AtomCollection,
}

impl<'a> ResidueAtoms<'a> {
    pub(crate) fn new(parent: &'a AtomCollection, atoms: Range<usize>) -> Self {
        let first = atoms.start;
        ResidueAtoms {
            res_id: parent.res_id(first),
            insertion_code: parent.insertion_code(first),
            res_name: parent.res_name(first),
            chain_id: parent.chain_id(first),
            atoms,
            parent,
        }
    }
    pub fn coords(&self) -> &'a [[f32; 3]] {
        &self.parent.coords()[self.atoms.clone()]
    }
    pub fn atom_names(&self) -> &'a [String] {
        &self.parent.atom_names()[self.atoms.clone()]
    }
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utilities::get_dimer;

    #[test]
    fn test_first_residue() {
        let ac = get_dimer();
        let residue = ac.iter_residues_all().next().unwrap();

        assert_eq!(residue.atoms, 0..2);
        assert_eq!(residue.res_id, 1);
        assert_eq!(residue.res_name, "GLY");
        assert_eq!(residue.chain_id, "A");
        assert_eq!(residue.atom_names(), ["N", "CA"]);
        assert_eq!(residue.insertion_code, "");
        assert_eq!(residue.coords()[1], [1.5, 0.0, 0.0]);
    }
}
