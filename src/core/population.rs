//! Per species host collections.

use super::host::Host;
use super::species::{N_SPECIES, Species};

/// The live hosts of the simulation, grouped by species for contact sampling.
#[derive(Clone, Debug, Default)]
pub struct Population {
    hosts: [Vec<Host>; N_SPECIES],
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn species(&self, species: Species) -> &[Host] {
        &self.hosts[species.index()]
    }

    pub fn species_mut(&mut self, species: Species) -> &mut Vec<Host> {
        &mut self.hosts[species.index()]
    }

    /// Add a host to its species' pool.
    pub fn push(&mut self, host: Host) {
        self.hosts[host.species.index()].push(host);
    }

    pub fn len(&self) -> usize {
        self.hosts.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.iter().all(Vec::is_empty)
    }

    pub fn sizes(&self) -> [usize; N_SPECIES] {
        std::array::from_fn(|species| self.hosts[species].len())
    }

    /// All live hosts in species order.
    pub fn iter(&self) -> impl Iterator<Item = &Host> {
        self.hosts.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Host> {
        self.hosts.iter_mut().flatten()
    }

    /// Drop every host marked dead.
    pub fn compact(&mut self) {
        for pool in self.hosts.iter_mut() {
            pool.retain(|host| host.alive);
        }
    }
}
