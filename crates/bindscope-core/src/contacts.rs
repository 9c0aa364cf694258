//! Interface contacts between two chains.
//!
//! A contact is a residue pair `(r_a, r_b)` with `r_a` in the first chain and
//! `r_b` in the second whose closest atom pair lies within the cutoff. Each
//! residue pair counts once regardless of how many atom pairs are close.
use crate::{AtomCollection, ResidueAtoms};
use anyhow::{bail, Result};
use itertools::Itertools;

/// Default residue-residue contact cutoff in Ångström.
pub const DEFAULT_CONTACT_CUTOFF: f32 = 4.5;

/// The two chains whose interface is measured and the distance cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub chain_a: String,
    pub chain_b: String,
    pub cutoff: f32,
}

impl Default for Interface {
    // Designs are scored as binder/target dimers
    fn default() -> Self {
        Interface {
            chain_a: "A".to_string(),
            chain_b: "B".to_string(),
            cutoff: DEFAULT_CONTACT_CUTOFF,
        }
    }
}

pub(crate) fn distance_squared(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Residue atoms with a bounding sphere for cheap rejection.
struct ResidueSphere<'a> {
    center: [f32; 3],
    radius: f32,
    coords: &'a [[f32; 3]],
}

impl<'a> ResidueSphere<'a> {
    fn from_residue(residue: &ResidueAtoms<'a>) -> Self {
        let coords = residue.coords();
        let n = coords.len().max(1) as f32;
        let mut center = [0.0f32; 3];
        for c in coords {
            center[0] += c[0];
            center[1] += c[1];
            center[2] += c[2];
        }
        center.iter_mut().for_each(|v| *v /= n);

        let radius = coords
            .iter()
            .map(|c| distance_squared(c, &center))
            .fold(0.0f32, f32::max)
            .sqrt();

        ResidueSphere {
            center,
            radius,
            coords,
        }
    }

    fn may_touch(&self, other: &ResidueSphere, cutoff: f32) -> bool {
        let reach = self.radius + other.radius + cutoff;
        distance_squared(&self.center, &other.center) <= reach * reach
    }

    fn in_contact(&self, other: &ResidueSphere, cutoff_sq: f32) -> bool {
        self.coords
            .iter()
            .cartesian_product(other.coords.iter())
            .any(|(a, b)| distance_squared(a, b) <= cutoff_sq)
    }
}

impl AtomCollection {
    /// Number of residue-residue contacts between `chain_a` and `chain_b`
    /// at [`DEFAULT_CONTACT_CUTOFF`].
    pub fn calculate_contacts_interface(&self, chain_a: &str, chain_b: &str) -> Result<usize> {
        self.calculate_contacts_interface_with_cutoff(chain_a, chain_b, DEFAULT_CONTACT_CUTOFF)
    }

    pub fn calculate_contacts_interface_with_cutoff(
        &self,
        chain_a: &str,
        chain_b: &str,
        cutoff: f32,
    ) -> Result<usize> {
        if !cutoff.is_finite() || cutoff < 0.0 {
            bail!("contact cutoff must be a non-negative distance, got {cutoff}");
        }
        if chain_a == chain_b {
            bail!("interface chains must differ, got {chain_a} twice");
        }
        let residues_a = self.residue_spheres(chain_a)?;
        let residues_b = self.residue_spheres(chain_b)?;
        let cutoff_sq = cutoff * cutoff;

        let contacts = residues_a
            .iter()
            .cartesian_product(residues_b.iter())
            .filter(|(a, b)| a.may_touch(b, cutoff) && a.in_contact(b, cutoff_sq))
            .count();

        tracing::debug!(
            chain_a,
            chain_b,
            cutoff,
            residues_a = residues_a.len(),
            residues_b = residues_b.len(),
            contacts,
            "interface contacts"
        );
        Ok(contacts)
    }

    /// Contacts for the chains and cutoff of an [`Interface`].
    pub fn interface_contacts(&self, interface: &Interface) -> Result<usize> {
        self.calculate_contacts_interface_with_cutoff(
            &interface.chain_a,
            &interface.chain_b,
            interface.cutoff,
        )
    }

    fn residue_spheres(&self, chain_id: &str) -> Result<Vec<ResidueSphere<'_>>> {
        if self.select_by_chain(chain_id).is_empty() {
            bail!(
                "chain {chain_id} not found; structure has chains [{}]",
                self.chain_ids().join(", ")
            );
        }
        Ok(self
            .iter_residues_chain(chain_id)
            .map(|residue| ResidueSphere::from_residue(&residue))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::{get_dimer, get_single_contact_dimer};

    #[test]
    fn test_default_cutoff() {
        let ac = get_dimer();
        assert_eq!(ac.calculate_contacts_interface("A", "B").unwrap(), 2);
        // symmetric in the chain order
        assert_eq!(ac.calculate_contacts_interface("B", "A").unwrap(), 2);
    }

    #[test]
    fn test_custom_cutoff() {
        let ac = get_dimer();
        assert_eq!(
            ac.calculate_contacts_interface_with_cutoff("A", "B", 3.5)
                .unwrap(),
            1
        );
        assert_eq!(
            ac.calculate_contacts_interface_with_cutoff("A", "B", 1.0)
                .unwrap(),
            0
        );
        // cutoff is inclusive: A1/B1 nitrogens sit exactly 3 Å apart
        assert_eq!(
            ac.calculate_contacts_interface_with_cutoff("A", "B", 3.0)
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_single_contact() {
        let ac = get_single_contact_dimer();
        assert_eq!(ac.interface_contacts(&Interface::default()).unwrap(), 1);
    }

    #[test]
    fn test_missing_chain() {
        let ac = get_dimer();
        let err = ac.calculate_contacts_interface("A", "C").unwrap_err();
        assert!(err.to_string().contains("chain C not found"));
    }

    #[test]
    fn test_invalid_arguments() {
        let ac = get_dimer();
        assert!(ac.calculate_contacts_interface("A", "A").is_err());
        assert!(ac
            .calculate_contacts_interface_with_cutoff("A", "B", -1.0)
            .is_err());
    }
}
