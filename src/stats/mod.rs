//! Statistics and metric trait implementations.

pub mod prevalence;

pub use prevalence::{StepReport, StrainPrevalence};
