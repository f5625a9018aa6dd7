//! All errors that can occur in the panzootic library.

use std::fmt;

use crate::config::ParametersError;

pub type Result<T> = std::result::Result<T, PanzooticError>;

#[derive(Debug)]
pub enum PanzooticError {
    InvalidSpecies(String),
    InitializationError(String),
    WriteError(String),
}

impl fmt::Display for PanzooticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PanzooticError::InvalidSpecies(message) => {
                write!(f, "InvalidSpecies: {}", message)
            }
            PanzooticError::InitializationError(message) => {
                write!(f, "InitializationError: {}", message)
            }
            PanzooticError::WriteError(message) => {
                write!(f, "WriteError: {}", message)
            }
        }
    }
}

impl std::error::Error for PanzooticError {}

impl From<ParametersError> for PanzooticError {
    fn from(error: ParametersError) -> Self {
        PanzooticError::InitializationError(error.to_string())
    }
}

impl From<std::io::Error> for PanzooticError {
    fn from(error: std::io::Error) -> Self {
        PanzooticError::WriteError(error.to_string())
    }
}

impl From<csv::Error> for PanzooticError {
    fn from(error: csv::Error) -> Self {
        PanzooticError::WriteError(error.to_string())
    }
}
