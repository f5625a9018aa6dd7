use serde::{Deserialize, Serialize};
use std::fs;

use crate::core::species::N_SPECIES;
use crate::core::strain::{N_H, N_N, Strain};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Parameters {
    /// Initial number of hosts per species, ordered Human, Pig, Bird,
    /// Poultry.
    #[serde(default = "default_initial_population")]
    pub initial_population: [usize; N_SPECIES],

    /// Base probability that a strain carried by a contact establishes
    /// itself in the receiving host.
    #[serde(default = "default_infection_rate")]
    pub infection_rate: f64,

    /// Recovery probability per step spent infected. The effective chance is
    /// this rate times the number of consecutive steps infected.
    #[serde(default = "default_recovery_rate")]
    pub recovery_rate: f64,

    /// Probability that a remembered immune segment survives one step. Lower
    /// values mean faster antigenic drift.
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    /// Per-step birth probability per live host.
    #[serde(default = "default_birth_rate")]
    pub birth_rate: f64,

    /// Per-step baseline death probability per live host.
    #[serde(default = "default_death_rate")]
    pub death_rate: f64,

    /// Transmission multiplier when the receiving host remembers exactly one
    /// of the two segments of a strain.
    #[serde(default = "default_cross_immunity_effect")]
    pub cross_immunity_effect: f64,

    /// Probability that a newborn carries a strain or immune memory from
    /// outside the simulated populations.
    #[serde(default = "default_immigration_rate")]
    pub immigration_rate: f64,

    /// Entry (i, j) is the fraction of species j's population each member of
    /// species i contacts per step.
    #[serde(default = "default_contact_rates")]
    pub contact_rates: [[f64; N_SPECIES]; N_SPECIES],

    /// Per-species death rate multiplier applied once per carried strain.
    /// Waterfowl and poultry tolerate infection, mammals do not.
    #[serde(default = "default_mortality_factors")]
    pub mortality_factors: [f64; N_SPECIES],

    /// Per-species probability that an initial host starts infected.
    #[serde(default = "default_seed_infection_rates")]
    pub seed_infection_rates: [f64; N_SPECIES],

    /// Per-species probability that an initial host starts with immune
    /// memory of one strain.
    #[serde(default = "default_seed_immunity_rates")]
    pub seed_immunity_rates: [f64; N_SPECIES],

    /// Scale transmission by per strain fitness weights.
    #[serde(default = "default_fitness_enabled")]
    pub fitness_enabled: bool,

    /// Sinusoidal modulation of the infection rate over the run.
    #[serde(default = "default_seasonality")]
    pub seasonality: Option<SeasonalForcing>,

    /// Strains used to seed initial infections instead of the per species
    /// susceptible pools. Immune memory seeding keeps using the pools.
    #[serde(default)]
    pub initial_strains: Option<Vec<Strain>>,

    /// Seed for the random number generator.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// Seasonal scaling of the infection rate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SeasonalForcing {
    /// Steps per season cycle.
    pub period: f64,
    /// Peak scaling of the infection rate.
    pub amplitude: f64,
}

impl SeasonalForcing {
    /// Infection rate multiplier at a step. Off-season values are negative
    /// and suppress transmission entirely.
    pub fn modulation(&self, step: usize) -> f64 {
        self.amplitude * (step as f64 * std::f64::consts::PI / self.period).sin()
    }
}

fn default_initial_population() -> [usize; N_SPECIES] {
    [900, 650, 1000, 750]
}

fn default_infection_rate() -> f64 {
    0.22
}

fn default_recovery_rate() -> f64 {
    0.2
}

fn default_mutation_rate() -> f64 {
    0.96
}

fn default_birth_rate() -> f64 {
    0.04
}

fn default_death_rate() -> f64 {
    0.039
}

fn default_cross_immunity_effect() -> f64 {
    0.05
}

fn default_immigration_rate() -> f64 {
    0.9
}

fn default_contact_rates() -> [[f64; N_SPECIES]; N_SPECIES] {
    [
        [0.01, 0.0045, 0.002, 0.001],
        [0.0045, 0.0095, 0.003, 0.0045],
        [0.002, 0.003, 0.09, 0.003],
        [0.001, 0.0045, 0.003, 0.01],
    ]
}

fn default_mortality_factors() -> [f64; N_SPECIES] {
    [1.25, 1.25, 1.005, 1.005]
}

fn default_seed_infection_rates() -> [f64; N_SPECIES] {
    [1.0 / 26.0, 1.0 / 26.0, 0.1, 0.1]
}

fn default_seed_immunity_rates() -> [f64; N_SPECIES] {
    [1.0 / 6.0, 1.0 / 6.0, 1.0, 1.0]
}

fn default_fitness_enabled() -> bool {
    true
}

fn default_seasonality() -> Option<SeasonalForcing> {
    Some(SeasonalForcing {
        period: 100.0,
        amplitude: 0.8,
    })
}

fn default_seed() -> u64 {
    42
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            initial_population: default_initial_population(),
            infection_rate: default_infection_rate(),
            recovery_rate: default_recovery_rate(),
            mutation_rate: default_mutation_rate(),
            birth_rate: default_birth_rate(),
            death_rate: default_death_rate(),
            cross_immunity_effect: default_cross_immunity_effect(),
            immigration_rate: default_immigration_rate(),
            contact_rates: default_contact_rates(),
            mortality_factors: default_mortality_factors(),
            seed_infection_rates: default_seed_infection_rates(),
            seed_immunity_rates: default_seed_immunity_rates(),
            fitness_enabled: default_fitness_enabled(),
            seasonality: default_seasonality(),
            initial_strains: None,
            seed: default_seed(),
        }
    }
}

#[derive(Debug)]
pub enum ParametersError {
    IoError(std::io::Error),
    YamlError(serde_yaml::Error),
    InvalidValue(String),
}

impl std::error::Error for ParametersError {}

impl std::fmt::Display for ParametersError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParametersError::IoError(error) => write!(formatter, "IO error: {}", error),
            ParametersError::YamlError(error) => write!(formatter, "YAML error: {}", error),
            ParametersError::InvalidValue(message) => {
                write!(formatter, "Invalid value: {}", message)
            }
        }
    }
}

impl std::fmt::Display for Parameters {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output = vec![];
        self.write(&mut output).map_err(|_| std::fmt::Error)?;
        write!(formatter, "{}", String::from_utf8(output).unwrap())
    }
}

impl Parameters {
    pub fn write(&self, writer: &mut dyn std::io::Write) -> Result<(), ParametersError> {
        serde_yaml::to_writer(writer, self).map_err(ParametersError::YamlError)
    }

    pub fn read(reader: &mut dyn std::io::Read) -> Result<Parameters, ParametersError> {
        let parameters: Parameters =
            serde_yaml::from_reader(reader).map_err(ParametersError::YamlError)?;
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn write_to_file(&self, filename: &str) -> Result<(), ParametersError> {
        let file = fs::File::create(filename).map_err(ParametersError::IoError)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write(&mut writer)
    }

    pub fn read_from_file(filename: &str) -> Result<Parameters, ParametersError> {
        let file = fs::File::open(filename).map_err(ParametersError::IoError)?;
        let mut reader = std::io::BufReader::new(file);
        Self::read(&mut reader)
    }

    /// Reject strain indices outside the universe.
    fn validate(&self) -> Result<(), ParametersError> {
        if let Some(strains) = &self.initial_strains {
            for strain in strains {
                if strain.h >= N_H || strain.n >= N_N {
                    return Err(ParametersError::InvalidValue(format!(
                        "initial strain ({}, {}) outside the {}x{} universe",
                        strain.h, strain.n, N_H, N_N
                    )));
                }
            }
        }
        Ok(())
    }
}
