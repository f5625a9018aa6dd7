//! Discrete time simulation of segmented virus transmission, reassortment
//! and host turnover across species.

mod contact;
mod demography;
mod immunity;
mod reassortment;
mod transmission;

use rand::prelude::*;
use rand_chacha::ChaCha12Rng;

use crate::config::Parameters;
use crate::core::fitness::FitnessTable;
use crate::core::host::Host;
use crate::core::population::Population;
use crate::core::species::Species;
use crate::core::susceptibility::SusceptibilityTable;
use crate::stats::{StepReport, StrainPrevalence};

/// Seed offset for the fitness table stream. Keeps the main stream
/// unchanged when fitness scaling is toggled.
const FITNESS_STREAM_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct Simulation {
    parameters: Parameters,
    susceptibility: SusceptibilityTable,
    fitness: Option<FitnessTable>,
    population: Population,
    rng: ChaCha12Rng,
    step: usize,
    next_host_id: usize,
}

impl Simulation {
    pub fn new(parameters: Parameters) -> Self {
        Self::with_susceptibility(parameters, SusceptibilityTable::default())
    }

    pub fn with_susceptibility(
        parameters: Parameters,
        susceptibility: SusceptibilityTable,
    ) -> Self {
        let rng = ChaCha12Rng::seed_from_u64(parameters.seed);
        let fitness = parameters.fitness_enabled.then(|| {
            let mut fitness_rng =
                ChaCha12Rng::seed_from_u64(parameters.seed.wrapping_add(FITNESS_STREAM_OFFSET));
            FitnessTable::from_susceptibility(&susceptibility, &mut fitness_rng)
        });
        let mut simulation = Self {
            parameters,
            susceptibility,
            fitness,
            population: Population::new(),
            rng,
            step: 0,
            next_host_id: 0,
        };
        simulation.seed_population();
        simulation
    }

    /// Create the initial hosts and roll their starting infections and
    /// immune memories. Seeded strains a species cannot sustain are
    /// dropped without replacement.
    fn seed_population(&mut self) {
        let Self {
            parameters,
            susceptibility,
            population,
            rng,
            next_host_id,
            ..
        } = self;
        for species in Species::ALL {
            let index = species.index();
            let pool = susceptibility.susceptible_strains(species);
            for _ in 0..parameters.initial_population[index] {
                let mut host = Host::new(*next_host_id, species);
                *next_host_id += 1;
                if rng.random::<f64>() < parameters.seed_infection_rates[index] {
                    let strain = match &parameters.initial_strains {
                        Some(strains) => strains.choose(&mut *rng).copied(),
                        None => pool.choose(&mut *rng).copied(),
                    };
                    if let Some(strain) = strain {
                        host.infect(strain, susceptibility);
                    }
                }
                if rng.random::<f64>() < parameters.seed_immunity_rates[index] {
                    if let Some(strain) = pool.choose(&mut *rng) {
                        host.immunize(*strain, susceptibility);
                    }
                }
                population.push(host);
            }
        }
    }

    /// Advance the simulation by one step and report the resulting state.
    ///
    /// Stages run in a fixed order: contact, reassortment, recovery and
    /// waning, demography. Strains picked up during contact only settle in
    /// their new hosts during reassortment, and newborns only join after
    /// the death sweep, so they first act in the following step.
    pub fn step(&mut self) -> StepReport {
        self.step += 1;
        self.contact_stage();
        self.reassortment_stage();
        self.immunity_stage();
        self.demography_stage();
        self.report()
    }

    /// Snapshot of the current state without advancing.
    pub fn report(&self) -> StepReport {
        StepReport {
            step: self.step,
            populations: self.population.sizes(),
            counts: self.population.prevalence(),
        }
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn fitness(&self) -> Option<&FitnessTable> {
        self.fitness.as_ref()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
