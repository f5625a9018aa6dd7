//! Strain identities and segment presence matrices.
//!
//! A strain is one hemagglutinin variant paired with one neuraminidase
//! variant. The strains a host carries are stored as a dense 0/1 matrix over
//! the full strain universe, so the set operations of the model reduce to
//! elementwise matrix operations: union is an elementwise max, susceptibility
//! filtering is an elementwise multiply, and reassortment is an outer product
//! of the segment presence vectors.

use std::fmt;

use derive_more::Deref;
use itertools::iproduct;
use ndarray::{Array1, Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of H (hemagglutinin) segment variants.
pub const N_H: usize = 16;

/// Number of N (neuraminidase) segment variants.
pub const N_N: usize = 9;

/// A strain identity as a pair of segment indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Strain {
    pub h: usize,
    pub n: usize,
}

impl Strain {
    #[inline]
    pub fn new(h: usize, n: usize) -> Self {
        debug_assert!(h < N_H && n < N_N);
        Self { h, n }
    }
}

/// Strains are labeled with one-based segment numbers, so `(0, 0)` prints as
/// the familiar `H1N1`.
impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "H{}N{}", self.h + 1, self.n + 1)
    }
}

/// The full strain universe in row major order.
pub fn all_strains() -> impl Iterator<Item = Strain> {
    iproduct!(0..N_H, 0..N_N).map(|(h, n)| Strain::new(h, n))
}

/// A 0/1 presence matrix over the strain universe, rows indexed by H variant
/// and columns by N variant.
#[derive(Clone, Debug, Deref, PartialEq)]
pub struct StrainMatrix(Array2<u8>);

impl StrainMatrix {
    pub fn empty() -> Self {
        Self(Array2::zeros((N_H, N_N)))
    }

    pub fn from_strains(strains: impl IntoIterator<Item = Strain>) -> Self {
        let mut matrix = Self::empty();
        for strain in strains {
            matrix.set(strain);
        }
        matrix
    }

    #[inline]
    pub fn contains(&self, strain: Strain) -> bool {
        self.0[[strain.h, strain.n]] != 0
    }

    #[inline]
    pub fn set(&mut self, strain: Strain) {
        self.0[[strain.h, strain.n]] = 1;
    }

    pub fn clear(&mut self) {
        self.0.fill(0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&present| present == 0)
    }

    /// Number of distinct strains present.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&present| present != 0).count()
    }

    /// Union with another presence matrix.
    pub fn merge(&mut self, other: &StrainMatrix) {
        self.0.zip_mut_with(&other.0, |a, b| *a = (*a).max(*b));
    }

    /// Drop every strain the mask does not permit.
    pub fn restrict(&mut self, mask: ArrayView2<u8>) {
        self.0 *= &mask;
    }

    /// Presence vector of the H segments across all held strains.
    pub fn h_segments(&self) -> Array1<u8> {
        Array1::from_shape_fn(N_H, |h| self.0.row(h).iter().any(|&v| v != 0) as u8)
    }

    /// Presence vector of the N segments across all held strains.
    pub fn n_segments(&self) -> Array1<u8> {
        Array1::from_shape_fn(N_N, |n| self.0.column(n).iter().any(|&v| v != 0) as u8)
    }

    /// Regenerate the matrix as the cross product of the held segments.
    ///
    /// Any H variant and N variant present in some held strain recombine
    /// freely, so co-infection with H1N2 and H3N4 also yields H1N4 and H3N2.
    /// Segment mixing within a host is approximated as instantaneous.
    pub fn reassort(&mut self) {
        let h = self.h_segments();
        let n = self.n_segments();
        self.0 = Array2::from_shape_fn((N_H, N_N), |(i, j)| h[i] * n[j]);
    }

    /// The held strains in row major order.
    pub fn strains(&self) -> SmallVec<[Strain; 8]> {
        self.0
            .indexed_iter()
            .filter(|&(_, &present)| present != 0)
            .map(|((h, n), _)| Strain::new(h, n))
            .collect()
    }
}

impl Default for StrainMatrix {
    fn default() -> Self {
        Self::empty()
    }
}
