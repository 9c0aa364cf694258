//! # bindscope-core
//!
//! Structure handling and statistics behind the design-correlation analysis.
//!
//! __bindscope-core__ provides functionality for:
//! * Reading PDB/mmCIF files into a columnar [`AtomCollection`]
//! * Selecting atoms and iterating residues by chain
//! * Counting residue-residue contacts across a chain interface
//! * Rank statistics and pairwise-complete correlation matrices
//!
mod atomcollection;
mod contacts;
mod conversions;
mod residue;
mod selection;
pub mod stats;

#[cfg(test)]
mod test_utilities;

pub use self::atomcollection::AtomCollection;
pub use self::contacts::{Interface, DEFAULT_CONTACT_CUTOFF};
pub use self::residue::{ResidueAtoms, ResidueIter};
pub use self::selection::{AtomSelector, Selection};
pub use self::stats::{CorrelationMatrix, Method};
