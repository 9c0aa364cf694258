use super::atoms::ResidueAtoms;
use crate::AtomCollection;

/// Walks an [`AtomCollection`] one residue at a time.
pub struct ResidueIter<'a> {
    collection: &'a AtomCollection,
    // residue start indices closed by the atom count
    bounds: Vec<usize>,
    next: usize,
}

impl<'a> ResidueIter<'a> {
    pub(crate) fn new(collection: &'a AtomCollection, bounds: Vec<usize>) -> Self {
        ResidueIter {
            collection,
            bounds,
            next: 0,
        }
    }
}

impl<'a> Iterator for ResidueIter<'a> {
    type Item = ResidueAtoms<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.bounds.get(self.next)?;
        let end = *self.bounds.get(self.next + 1)?;
        self.next += 1;
        Some(ResidueAtoms::new(self.collection, start..end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next + 1);
        (remaining, Some(remaining))
    }
}
