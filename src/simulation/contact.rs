use rand::prelude::*;

use super::Simulation;
use super::transmission::transmission_probability;
use crate::core::species::Species;
use crate::core::strain::Strain;

impl Simulation {
    /// Sample contacts for every host and collect the strains that make the
    /// jump. Hosts only mark their own pending buffer, so the outcome does
    /// not depend on the order hosts are processed in.
    pub(super) fn contact_stage(&mut self) {
        let effective_rate = self.effective_infection_rate();
        let Self {
            parameters,
            susceptibility,
            fitness,
            population,
            rng,
            ..
        } = self;

        let mut exposures: Vec<(Species, usize, Strain)> = Vec::new();
        for species in Species::ALL {
            for (receiver_index, receiver) in population.species(species).iter().enumerate() {
                for source in Species::ALL {
                    let pool = population.species(source);
                    let rate = parameters.contact_rates[species.index()][source.index()];
                    let count = contact_count(pool.len(), rate);
                    if count == 0 {
                        continue;
                    }
                    for contact_index in rand::seq::index::sample(&mut *rng, pool.len(), count) {
                        for strain in pool[contact_index].strains.strains() {
                            let probability = transmission_probability(
                                receiver,
                                strain,
                                effective_rate,
                                parameters.cross_immunity_effect,
                                susceptibility,
                                fitness.as_ref(),
                            );
                            if rng.random::<f64>() < probability {
                                exposures.push((species, receiver_index, strain));
                            }
                        }
                    }
                }
            }
        }

        for (species, index, strain) in exposures {
            population.species_mut(species)[index].pending.set(strain);
        }
    }
}

/// Number of hosts of a source species one host meets per step.
fn contact_count(pool_size: usize, rate: f64) -> usize {
    if pool_size == 0 || rate <= 0.0 {
        return 0;
    }
    ((pool_size as f64 * rate) as usize).min(pool_size)
}
