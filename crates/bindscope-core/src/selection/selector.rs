use super::selection::Selection;
use crate::contacts::distance_squared;
use crate::AtomCollection;
use pdbtbx::Element;

/// Narrows a selection one criterion at a time.
///
/// ```ignore
/// let nitrogens = structure.select().chain("B").element(Element::N).collect();
/// ```
pub struct AtomSelector<'a> {
    collection: &'a AtomCollection,
    selection: Selection,
}

impl<'a> AtomSelector<'a> {
    pub(crate) fn new(collection: &'a AtomCollection) -> Self {
        AtomSelector {
            collection,
            selection: Selection::all(collection.len()),
        }
    }
    fn retain(self, keep: impl Fn(&AtomCollection, usize) -> bool) -> Self {
        let collection = self.collection;
        let selection = self
            .selection
            .indices()
            .iter()
            .copied()
            .filter(|&idx| keep(collection, idx))
            .collect();
        AtomSelector {
            collection,
            selection,
        }
    }
    pub fn chain(self, chain_id: &str) -> Self {
        self.retain(|ac, idx| ac.chain_id(idx) == chain_id)
    }
    pub fn residue(self, res_name: &str) -> Self {
        self.retain(|ac, idx| ac.res_name(idx) == res_name)
    }
    pub fn element(self, element: Element) -> Self {
        self.retain(|ac, idx| *ac.element(idx) == element)
    }
    pub fn hetero(self, is_hetero: bool) -> Self {
        self.retain(|ac, idx| ac.is_hetero(idx) == is_hetero)
    }
    /// Atoms within `radius` Å of `center`, inclusive.
    pub fn sphere(self, center: [f32; 3], radius: f32) -> Self {
        let radius_sq = radius * radius;
        self.retain(|ac, idx| distance_squared(ac.coord(idx), &center) <= radius_sq)
    }
    pub fn collect(self) -> Selection {
        self.selection
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utilities::get_dimer;

    #[test]
    fn test_sphere_selection() {
        let ac = get_dimer();
        // chain B atoms within 3.5 Å of the first atom of chain A
        let near = ac.select().chain("B").sphere([0.0, 0.0, 0.0], 3.5).collect();
        assert_eq!(near.indices(), &[4, 5]);

        assert!(ac.select().hetero(true).collect().is_empty());
        assert_eq!(ac.select().hetero(false).collect().len(), 10);
    }
}
