use rand::prelude::*;

use super::Simulation;

impl Simulation {
    /// Recovery sweeps carried strains into immune memory, then memory
    /// fades one segment at a time.
    pub(super) fn immunity_stage(&mut self) {
        let Self {
            parameters,
            population,
            rng,
            ..
        } = self;
        for host in population.iter_mut() {
            if host.is_infected() {
                host.time_since_infection += 1;
                let probability =
                    parameters.recovery_rate * host.time_since_infection as f64;
                if rng.random::<f64>() <= probability {
                    host.recover();
                }
            }
            for entry in host.immune_h.iter_mut().chain(host.immune_n.iter_mut()) {
                if *entry != 0 && rng.random::<f64>() >= parameters.mutation_rate {
                    *entry = 0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Parameters;
    use crate::core::host::Host;
    use crate::core::species::{N_SPECIES, Species};
    use crate::core::strain::Strain;

    fn simulation_with(recovery_rate: f64, mutation_rate: f64) -> Simulation {
        Simulation::new(Parameters {
            initial_population: [0; N_SPECIES],
            recovery_rate,
            mutation_rate,
            fitness_enabled: false,
            ..Parameters::default()
        })
    }

    #[test]
    fn recovery_is_certain_at_full_rate() {
        let mut simulation = simulation_with(1.0, 1.0);
        let mut host = Host::new(0, Species::Bird);
        assert!(host.infect(Strain::new(7, 3), &simulation.susceptibility));
        simulation.population.push(host);
        simulation.immunity_stage();
        let host = &simulation.population.species(Species::Bird)[0];
        assert!(!host.is_infected());
        assert_eq!(host.immune_h[7], 1);
        assert_eq!(host.immune_n[3], 1);
        assert_eq!(host.time_since_infection, 0);
    }

    #[test]
    fn infections_persist_at_zero_rate() {
        let mut simulation = simulation_with(0.0, 1.0);
        let mut host = Host::new(0, Species::Bird);
        assert!(host.infect(Strain::new(7, 3), &simulation.susceptibility));
        simulation.population.push(host);
        for _ in 0..3 {
            simulation.immunity_stage();
        }
        let host = &simulation.population.species(Species::Bird)[0];
        assert!(host.is_infected());
        assert_eq!(host.time_since_infection, 3);
    }

    #[test]
    fn memory_fades_without_retention() {
        let mut simulation = simulation_with(0.0, 0.0);
        let mut host = Host::new(0, Species::Bird);
        assert!(host.immunize(Strain::new(7, 3), &simulation.susceptibility));
        simulation.population.push(host);
        simulation.immunity_stage();
        let host = &simulation.population.species(Species::Bird)[0];
        assert_eq!(host.immune_h.sum(), 0);
        assert_eq!(host.immune_n.sum(), 0);
    }

    #[test]
    fn memory_survives_at_full_retention() {
        let mut simulation = simulation_with(0.0, 1.0);
        let mut host = Host::new(0, Species::Bird);
        assert!(host.immunize(Strain::new(7, 3), &simulation.susceptibility));
        simulation.population.push(host);
        for _ in 0..10 {
            simulation.immunity_stage();
        }
        let host = &simulation.population.species(Species::Bird)[0];
        assert_eq!(host.immune_h[7], 1);
        assert_eq!(host.immune_n[3], 1);
    }
}
