//! Transmission fitness weights per strain.

use ndarray::Array2;
use npyz::WriterBuilder;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::strain::{N_H, N_N, Strain};
use super::susceptibility::SusceptibilityTable;
use crate::errors::PanzooticError;

/// Per strain multiplicative transmission weights, drawn once per run and
/// held constant.
#[derive(Clone, Debug, PartialEq)]
pub struct FitnessTable {
    table: Array2<f64>,
}

impl FitnessTable {
    /// Draw a fitness table from the susceptibility structure.
    ///
    /// Every strain receives a Normal(1, 0.2) draw divided by the number of
    /// species able to carry it, so specialist strains transmit better than
    /// generalists. Strains without any host species get weight zero, and
    /// negative draws clamp to zero.
    pub fn from_susceptibility<R: Rng>(
        susceptibility: &SusceptibilityTable,
        rng: &mut R,
    ) -> Self {
        let normal = Normal::new(1.0, 0.2).unwrap();
        let hosts = susceptibility.host_counts();
        let table = Array2::from_shape_fn((N_H, N_N), |(h, n)| {
            let n_hosts = hosts[[h, n]];
            if n_hosts == 0 {
                return 0.0;
            }
            (normal.sample(rng) / n_hosts as f64).max(0.0)
        });
        Self { table }
    }

    #[inline]
    pub fn get(&self, strain: Strain) -> f64 {
        self.table[[strain.h, strain.n]]
    }

    pub fn write(&self, writer: &mut impl std::io::Write) -> Result<(), PanzooticError> {
        let shape = &[N_H as u64, N_N as u64];
        let mut npy_writer = npyz::WriteOptions::new()
            .default_dtype()
            .shape(shape)
            .writer(writer)
            .begin_nd()
            .map_err(|e| PanzooticError::WriteError(format!("{}", e)))?;
        npy_writer
            .extend(self.table.iter().copied())
            .map_err(|e| PanzooticError::WriteError(format!("{}", e)))?;
        npy_writer
            .finish()
            .map_err(|e| PanzooticError::WriteError(format!("{}", e)))?;
        Ok(())
    }
}
