use ndarray::Array3;

use crate::core::population::Population;
use crate::core::species::N_SPECIES;
use crate::core::strain::{N_H, N_N};

/// Counts of infected hosts per species and strain.
pub trait StrainPrevalence {
    fn prevalence(&self) -> Array3<u32>;
}

impl StrainPrevalence for Population {
    fn prevalence(&self) -> Array3<u32> {
        let mut counts = Array3::zeros((N_SPECIES, N_H, N_N));
        for host in self.iter() {
            let species = host.species.index();
            for strain in host.strains.strains() {
                counts[[species, strain.h, strain.n]] += 1;
            }
        }
        counts
    }
}

/// Snapshot of the simulation state after one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    pub step: usize,
    pub populations: [usize; N_SPECIES],
    pub counts: Array3<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::Host;
    use crate::core::species::Species;
    use crate::core::strain::Strain;
    use crate::core::susceptibility::SusceptibilityTable;

    #[test]
    fn prevalence_counts_hosts_per_strain() {
        let table = SusceptibilityTable::default();
        let mut population = Population::new();
        let mut carrier = Host::new(0, Species::Bird);
        assert!(carrier.infect(Strain::new(7, 3), &table));
        assert!(carrier.infect(Strain::new(3, 7), &table));
        population.push(carrier);
        let mut second = Host::new(1, Species::Bird);
        assert!(second.infect(Strain::new(7, 3), &table));
        population.push(second);
        population.push(Host::new(2, Species::Human));

        let counts = population.prevalence();
        assert_eq!(counts[[Species::Bird.index(), 7, 3]], 2);
        assert_eq!(counts[[Species::Bird.index(), 3, 7]], 1);
        assert_eq!(counts.sum(), 3);
    }

    #[test]
    fn empty_population_has_zero_prevalence() {
        let population = Population::new();
        assert_eq!(population.prevalence().sum(), 0);
    }
}
