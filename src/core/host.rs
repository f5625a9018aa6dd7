//! The host agent.

use ndarray::Array1;

use super::species::Species;
use super::strain::{N_H, N_N, Strain, StrainMatrix};
use super::susceptibility::SusceptibilityTable;

/// Degree of immune protection a host holds against a strain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protection {
    None,
    Partial,
    Full,
}

/// One organism in the simulated population.
#[derive(Clone, Debug)]
pub struct Host {
    pub id: usize,
    pub species: Species,
    /// Strains currently infecting the host.
    pub strains: StrainMatrix,
    /// Strains contracted this step, integrated during reassortment.
    pub pending: StrainMatrix,
    /// H segment variants the immune system remembers.
    pub immune_h: Array1<u8>,
    /// N segment variants the immune system remembers.
    pub immune_n: Array1<u8>,
    /// Steps spent infected since the last recovery.
    pub time_since_infection: u32,
    pub alive: bool,
}

impl Host {
    pub fn new(id: usize, species: Species) -> Self {
        Self {
            id,
            species,
            strains: StrainMatrix::empty(),
            pending: StrainMatrix::empty(),
            immune_h: Array1::zeros(N_H),
            immune_n: Array1::zeros(N_N),
            time_since_infection: 0,
            alive: true,
        }
    }

    /// Infect the host, discarding strains the species cannot carry.
    ///
    /// Returns whether the strain took hold.
    pub fn infect(&mut self, strain: Strain, susceptibility: &SusceptibilityTable) -> bool {
        if !susceptibility.permits(self.species, strain) {
            return false;
        }
        self.strains.set(strain);
        true
    }

    /// Record immune memory of both segments of a strain, discarding strains
    /// the species cannot carry.
    pub fn immunize(&mut self, strain: Strain, susceptibility: &SusceptibilityTable) -> bool {
        if !susceptibility.permits(self.species, strain) {
            return false;
        }
        self.immune_h[strain.h] = 1;
        self.immune_n[strain.n] = 1;
        true
    }

    /// Immune protection the host holds against a strain.
    pub fn protection(&self, strain: Strain) -> Protection {
        match (self.immune_h[strain.h] != 0, self.immune_n[strain.n] != 0) {
            (true, true) => Protection::Full,
            (false, false) => Protection::None,
            _ => Protection::Partial,
        }
    }

    pub fn is_infected(&self) -> bool {
        !self.strains.is_empty()
    }

    /// Clear the infection, moving every held segment into immune memory.
    pub fn recover(&mut self) {
        let h = self.strains.h_segments();
        let n = self.strains.n_segments();
        self.immune_h.zip_mut_with(&h, |memory, held| *memory = (*memory).max(*held));
        self.immune_n.zip_mut_with(&n, |memory, held| *memory = (*memory).max(*held));
        self.strains.clear();
        self.time_since_infection = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infection_is_gated_by_susceptibility() {
        let susceptibility = SusceptibilityTable::default();
        let mut host = Host::new(0, Species::Human);
        assert!(host.infect(Strain::new(0, 0), &susceptibility));
        assert!(!host.infect(Strain::new(15, 8), &susceptibility));
        assert_eq!(host.strains.count(), 1);
    }

    #[test]
    fn immunization_records_both_segments() {
        let susceptibility = SusceptibilityTable::default();
        let mut host = Host::new(0, Species::Bird);
        assert!(host.immunize(Strain::new(4, 7), &susceptibility));
        assert_eq!(host.immune_h[4], 1);
        assert_eq!(host.immune_n[7], 1);
        assert_eq!(host.immune_h.sum(), 1);
        assert_eq!(host.immune_n.sum(), 1);
    }

    #[test]
    fn protection_levels() {
        let susceptibility = SusceptibilityTable::default();
        let mut host = Host::new(0, Species::Bird);
        assert_eq!(host.protection(Strain::new(2, 3)), Protection::None);
        host.immunize(Strain::new(2, 5), &susceptibility);
        assert_eq!(host.protection(Strain::new(2, 3)), Protection::Partial);
        assert_eq!(host.protection(Strain::new(2, 5)), Protection::Full);
        host.immunize(Strain::new(6, 3), &susceptibility);
        assert_eq!(host.protection(Strain::new(2, 3)), Protection::Full);
    }

    #[test]
    fn recovery_moves_segments_into_memory() {
        let susceptibility = SusceptibilityTable::default();
        let mut host = Host::new(0, Species::Bird);
        host.infect(Strain::new(1, 2), &susceptibility);
        host.infect(Strain::new(3, 4), &susceptibility);
        host.time_since_infection = 5;

        host.recover();

        assert!(!host.is_infected());
        assert_eq!(host.time_since_infection, 0);
        assert_eq!(host.immune_h[1], 1);
        assert_eq!(host.immune_h[3], 1);
        assert_eq!(host.immune_n[2], 1);
        assert_eq!(host.immune_n[4], 1);
        assert_eq!(host.immune_h.sum(), 2);
        assert_eq!(host.immune_n.sum(), 2);
    }
}
