use crate::AtomCollection;
use itertools::Itertools;
use pdbtbx::{Atom, Chain, Element, Residue, PDB};

// coords, hetero, atom name, residue id, insertion code, residue name, element, chain
type AtomRow = ([f32; 3], bool, String, i32, String, String, Element, String);

fn atom_row(chain: &Chain, residue: &Residue, atom: &Atom) -> Option<AtomRow> {
    let element = atom.element()?.clone();
    let (x, y, z) = atom.pos();
    Some((
        [x as f32, y as f32, z as f32],
        atom.hetero(),
        atom.name().to_string(),
        residue.serial_number() as i32,
        residue.insertion_code().unwrap_or_default().to_string(),
        residue.name().unwrap_or_default().to_string(),
        element,
        chain.id().to_string(),
    ))
}

impl From<&PDB> for AtomCollection {
    /// Flattens chain -> residue -> atom of the first model. Atoms without an
    /// element are skipped; a file without models gives an empty collection.
    fn from(pdb: &PDB) -> Self {
        let Some(model) = pdb.models().next() else {
            return AtomCollection::default();
        };
        if pdb.model_count() > 1 {
            tracing::debug!(models = pdb.model_count(), "using the first model only");
        }

        let (coords, is_hetero, atom_names, res_ids, ins_codes, res_names, elements, chain_ids): (
            Vec<_>,
            Vec<_>,
            Vec<_>,
            Vec<_>,
            Vec<_>,
            Vec<_>,
            Vec<_>,
            Vec<_>,
        ) = model
            .chains()
            .flat_map(|chain| {
                chain.residues().flat_map(move |residue| {
                    residue
                        .atoms()
                        .filter_map(move |atom| atom_row(chain, residue, atom))
                })
            })
            .multiunzip();

        AtomCollection::new(
            coords, res_ids, ins_codes, res_names, is_hetero, elements, atom_names, chain_ids,
        )
    }
}
