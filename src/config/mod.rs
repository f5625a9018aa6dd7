//! Configuration data structures for simulation setups.

mod parameters;

pub use parameters::{Parameters, ParametersError, SeasonalForcing};
