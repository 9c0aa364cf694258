mod atoms;
mod iterator;

pub use atoms::ResidueAtoms;
pub use iterator::ResidueIter;
