use std::ops::BitAnd;

/// Sorted, duplicate-free atom indices into an [`AtomCollection`](crate::AtomCollection).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Selection { indices }
    }
    pub(crate) fn all(size: usize) -> Self {
        Selection {
            indices: (0..size).collect(),
        }
    }
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
    pub fn len(&self) -> usize {
        self.indices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
    pub fn contains(&self, idx: usize) -> bool {
        self.indices.binary_search(&idx).is_ok()
    }
    pub fn and(&self, other: &Selection) -> Selection {
        Selection {
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&idx| other.contains(idx))
                .collect(),
        }
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Selection::new(iter.into_iter().collect())
    }
}

impl BitAnd for &Selection {
    type Output = Selection;

    fn bitand(self, other: Self) -> Selection {
        self.and(other)
    }
}
