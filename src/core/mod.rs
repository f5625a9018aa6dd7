//! This module contains the core datatypes of the library.

pub mod fitness;
pub mod host;
pub mod population;
pub mod species;
pub mod strain;
pub mod susceptibility;

pub use fitness::FitnessTable;
pub use host::{Host, Protection};
pub use population::Population;
pub use species::{N_SPECIES, Species};
pub use strain::{N_H, N_N, Strain, StrainMatrix, all_strains};
pub use susceptibility::SusceptibilityTable;
