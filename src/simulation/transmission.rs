use crate::core::fitness::FitnessTable;
use crate::core::host::{Host, Protection};
use crate::core::strain::Strain;
use crate::core::susceptibility::SusceptibilityTable;

use super::Simulation;

impl Simulation {
    /// Infection rate after seasonal forcing. Off-season modulation is
    /// negative and pushes every transmission probability to zero.
    pub(super) fn effective_infection_rate(&self) -> f64 {
        match &self.parameters.seasonality {
            Some(forcing) => self.parameters.infection_rate * forcing.modulation(self.step),
            None => self.parameters.infection_rate,
        }
    }
}

/// Probability that a strain carried by a contact establishes itself in the
/// receiving host.
pub(super) fn transmission_probability(
    receiver: &Host,
    strain: Strain,
    effective_rate: f64,
    cross_immunity_effect: f64,
    susceptibility: &SusceptibilityTable,
    fitness: Option<&FitnessTable>,
) -> f64 {
    if !susceptibility.permits(receiver.species, strain) {
        return 0.0;
    }
    let mut probability = effective_rate;
    if let Some(table) = fitness {
        probability *= table.get(strain);
    }
    match receiver.protection(strain) {
        Protection::Full => return 0.0,
        Protection::Partial => probability *= cross_immunity_effect,
        Protection::None => {}
    }
    probability.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Parameters, SeasonalForcing};
    use crate::core::species::{N_SPECIES, Species};
    use rand::prelude::*;
    use rand_chacha::ChaCha12Rng;

    fn human_host() -> (Host, SusceptibilityTable) {
        (Host::new(0, Species::Human), SusceptibilityTable::default())
    }

    #[test]
    fn feasible_strain_transmits_at_the_effective_rate() {
        let (host, table) = human_host();
        let p = transmission_probability(&host, Strain::new(0, 0), 0.22, 0.05, &table, None);
        assert_eq!(p, 0.22);
    }

    #[test]
    fn infeasible_strain_never_transmits() {
        let (host, table) = human_host();
        // H8N4 has no documented human infections.
        let p = transmission_probability(&host, Strain::new(7, 3), 0.9, 0.05, &table, None);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn full_immunity_blocks_transmission() {
        let (mut host, table) = human_host();
        assert!(host.immunize(Strain::new(0, 0), &table));
        let p = transmission_probability(&host, Strain::new(0, 0), 0.22, 0.05, &table, None);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn partial_immunity_scales_transmission() {
        let (mut host, table) = human_host();
        assert!(host.immunize(Strain::new(0, 0), &table));
        // H5N1 shares only the neuraminidase segment with H1N1.
        let p = transmission_probability(&host, Strain::new(4, 0), 0.22, 0.05, &table, None);
        assert_eq!(p, 0.22 * 0.05);
    }

    #[test]
    fn fitness_weight_scales_transmission() {
        let (host, table) = human_host();
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let fitness = FitnessTable::from_susceptibility(&table, &mut rng);
        let strain = Strain::new(0, 0);
        let weighted =
            transmission_probability(&host, strain, 0.5, 0.05, &table, Some(&fitness));
        assert_eq!(weighted, (0.5 * fitness.get(strain)).clamp(0.0, 1.0));
    }

    #[test]
    fn probability_is_clamped_to_the_unit_interval() {
        let (host, table) = human_host();
        let strain = Strain::new(0, 0);
        assert_eq!(
            transmission_probability(&host, strain, 1.8, 0.05, &table, None),
            1.0
        );
        // Negative rates happen off-season.
        assert_eq!(
            transmission_probability(&host, strain, -0.3, 0.05, &table, None),
            0.0
        );
    }

    #[test]
    fn seasonal_forcing_scales_the_infection_rate() {
        let mut simulation = Simulation::new(Parameters {
            initial_population: [0; N_SPECIES],
            infection_rate: 0.2,
            fitness_enabled: false,
            seasonality: Some(SeasonalForcing {
                period: 100.0,
                amplitude: 0.8,
            }),
            ..Parameters::default()
        });
        simulation.step = 50;
        assert!((simulation.effective_infection_rate() - 0.2 * 0.8).abs() < 1e-12);
        simulation.step = 150;
        assert!(simulation.effective_infection_rate() < 0.0);
    }

    #[test]
    fn constant_rate_without_seasonality() {
        let mut simulation = Simulation::new(Parameters {
            initial_population: [0; N_SPECIES],
            infection_rate: 0.2,
            fitness_enabled: false,
            seasonality: None,
            ..Parameters::default()
        });
        simulation.step = 150;
        assert_eq!(simulation.effective_infection_rate(), 0.2);
    }
}
