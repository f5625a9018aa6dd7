//! Host species of the model.

use std::str::FromStr;

use derive_more::Display;

use crate::errors::PanzooticError;

/// Number of host species in the model.
pub const N_SPECIES: usize = 4;

/// A host species.
///
/// The discriminant is the stable index into the susceptibility table and the
/// contact rate matrix.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Species {
    Human = 0,
    Pig = 1,
    Bird = 2,
    Poultry = 3,
}

impl Species {
    pub const ALL: [Species; N_SPECIES] = [
        Species::Human,
        Species::Pig,
        Species::Bird,
        Species::Poultry,
    ];

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Species {
    type Err = PanzooticError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Human" | "human" => Ok(Species::Human),
            "Pig" | "pig" => Ok(Species::Pig),
            "Bird" | "bird" => Ok(Species::Bird),
            "Poultry" | "poultry" => Ok(Species::Poultry),
            _ => Err(PanzooticError::InvalidSpecies(name.to_string())),
        }
    }
}
