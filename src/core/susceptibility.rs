//! Which species can host which strains.

use ndarray::{Array2, Array3, ArrayView2, Axis};

use super::species::{N_SPECIES, Species};
use super::strain::{N_H, N_N, Strain};
use crate::errors::PanzooticError;

/// Subtype pairs with documented human infections, from H1N1 to H10N7.
const HUMAN_SUBTYPES: [(usize, usize); 9] = [
    (0, 0),
    (1, 1),
    (2, 1),
    (4, 0),
    (6, 1),
    (6, 2),
    (6, 6),
    (8, 1),
    (9, 6),
];

/// Subtype pairs established in swine herds, from H1N1 to H9N2.
const SWINE_SUBTYPES: [(usize, usize); 8] = [
    (0, 0),
    (0, 1),
    (1, 2),
    (2, 1),
    (2, 2),
    (3, 5),
    (4, 1),
    (8, 1),
];

/// Static species x H x N table of infectability flags, fixed for the run.
#[derive(Clone, Debug, PartialEq)]
pub struct SusceptibilityTable {
    table: Array3<u8>,
}

impl SusceptibilityTable {
    pub fn new(table: Array3<u8>) -> Result<Self, PanzooticError> {
        if table.shape() != [N_SPECIES, N_H, N_N] {
            return Err(PanzooticError::InitializationError(format!(
                "Susceptibility table has wrong shape: {:?} instead of {:?}",
                table.shape(),
                [N_SPECIES, N_H, N_N]
            )));
        }
        Ok(Self { table })
    }

    /// Whether the species can carry the strain at all.
    #[inline]
    pub fn permits(&self, species: Species, strain: Strain) -> bool {
        self.table[[species.index(), strain.h, strain.n]] != 0
    }

    /// The species' infectability mask over the strain universe.
    pub fn mask(&self, species: Species) -> ArrayView2<u8> {
        self.table.index_axis(Axis(0), species.index())
    }

    /// All strains the species can carry, in row major order.
    pub fn susceptible_strains(&self, species: Species) -> Vec<Strain> {
        self.mask(species)
            .indexed_iter()
            .filter(|&(_, &permitted)| permitted != 0)
            .map(|((h, n), _)| Strain::new(h, n))
            .collect()
    }

    /// Number of species able to carry each strain.
    pub fn host_counts(&self) -> Array2<u8> {
        self.table.sum_axis(Axis(0))
    }
}

/// The influenza A reference table: humans and swine carry their documented
/// subtype pools, waterfowl are the natural reservoir and carry every
/// subtype, and domestic poultry carry everything up to H13.
impl Default for SusceptibilityTable {
    fn default() -> Self {
        let mut table = Array3::zeros((N_SPECIES, N_H, N_N));
        for &(h, n) in HUMAN_SUBTYPES.iter() {
            table[[Species::Human.index(), h, n]] = 1;
        }
        for &(h, n) in SWINE_SUBTYPES.iter() {
            table[[Species::Pig.index(), h, n]] = 1;
        }
        for h in 0..N_H {
            for n in 0..N_N {
                table[[Species::Bird.index(), h, n]] = 1;
                if h < 13 {
                    table[[Species::Poultry.index(), h, n]] = 1;
                }
            }
        }
        Self { table }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn rejects_wrong_shape() {
        let result = SusceptibilityTable::new(Array3::zeros((2, N_H, N_N)));
        assert!(matches!(
            result,
            Err(PanzooticError::InitializationError(_))
        ));
    }

    #[test]
    fn reference_table_permits_known_subtypes() {
        let table = SusceptibilityTable::default();
        // H1N1 circulates in humans, H16N9 does not.
        assert!(table.permits(Species::Human, Strain::new(0, 0)));
        assert!(!table.permits(Species::Human, Strain::new(15, 8)));
        // Swine carry H3N2 but not H7N7.
        assert!(table.permits(Species::Pig, Strain::new(2, 1)));
        assert!(!table.permits(Species::Pig, Strain::new(6, 6)));
        // Waterfowl carry everything, poultry nothing beyond H13.
        assert!(table.permits(Species::Bird, Strain::new(15, 8)));
        assert!(table.permits(Species::Poultry, Strain::new(12, 8)));
        assert!(!table.permits(Species::Poultry, Strain::new(13, 0)));
    }

    #[test]
    fn susceptible_strain_pools_have_reference_sizes() {
        let table = SusceptibilityTable::default();
        assert_eq!(table.susceptible_strains(Species::Human).len(), 9);
        assert_eq!(table.susceptible_strains(Species::Pig).len(), 8);
        assert_eq!(table.susceptible_strains(Species::Bird).len(), N_H * N_N);
        assert_eq!(table.susceptible_strains(Species::Poultry).len(), 13 * N_N);
    }

    #[test]
    fn host_counts_sum_over_species() {
        let table = SusceptibilityTable::default();
        let counts = table.host_counts();
        // H1N1 infects all four species, H16N1 only waterfowl.
        assert_eq!(counts[[0, 0]], 4);
        assert_eq!(counts[[15, 0]], 1);
    }
}
