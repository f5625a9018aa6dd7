use rand::prelude::*;

use super::Simulation;
use crate::core::host::Host;
use crate::core::strain::{N_H, N_N, Strain};

impl Simulation {
    /// Births, immigration seeding through newborns, and deaths. Newborns
    /// join after the death sweep and first act in the following step.
    pub(super) fn demography_stage(&mut self) {
        let Self {
            parameters,
            susceptibility,
            population,
            rng,
            next_host_id,
            ..
        } = self;
        let mut newborns = Vec::new();
        for host in population.iter_mut() {
            if rng.random::<f64>() < parameters.birth_rate {
                let mut newborn = Host::new(*next_host_id, host.species);
                *next_host_id += 1;
                // Newborns may bring a strain or an immune memory in from
                // outside the simulated populations. Draws their species
                // cannot sustain are dropped without replacement.
                if rng.random::<f64>() < parameters.immigration_rate {
                    newborn.infect(random_strain(&mut *rng), susceptibility);
                }
                if rng.random::<f64>() < parameters.immigration_rate {
                    newborn.immunize(random_strain(&mut *rng), susceptibility);
                }
                newborns.push(newborn);
            }
            let mortality = parameters.mortality_factors[host.species.index()];
            let probability =
                parameters.death_rate * mortality.powi(host.strains.count() as i32);
            if rng.random::<f64>() < probability {
                host.alive = false;
            }
        }
        population.compact();
        for newborn in newborns {
            population.push(newborn);
        }
    }
}

/// Uniform draw over the whole strain universe.
fn random_strain<R: Rng>(rng: &mut R) -> Strain {
    Strain::new(rng.random_range(0..N_H), rng.random_range(0..N_N))
}
