//! Precomputed relative neighbour offsets.

use std::iter;

use itertools::Itertools;

/// Which neighbours a query should consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Cells sharing a face: exactly one axis differs by one (`2N` neighbours).
    #[default]
    Orthogonal,
    /// Every cell in the surrounding hypercube (`3^N - 1` neighbours).
    Diagonal,
}

/// Offset tables for one dimensionality.
///
/// Offsets are ordered lexicographically over `(-1, 0, +1)` with axis 0 most
/// significant, so neighbour queries always return cells in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NeighborOffsets {
    diagonal: Vec<Vec<isize>>,
    orthogonal: Vec<Vec<isize>>,
}

impl NeighborOffsets {
    pub(crate) fn new(dimensions: usize) -> Self {
        let diagonal: Vec<Vec<isize>> = iter::repeat_n([-1_isize, 0, 1], dimensions)
            .multi_cartesian_product()
            .filter(|offset| offset.iter().any(|&delta| delta != 0))
            .collect();

        let orthogonal = diagonal
            .iter()
            .filter(|offset| offset.iter().filter(|&&delta| delta != 0).count() == 1)
            .cloned()
            .collect();

        Self {
            diagonal,
            orthogonal,
        }
    }

    pub(crate) fn get(&self, connectivity: Connectivity) -> &[Vec<isize>] {
        match connectivity {
            Connectivity::Orthogonal => &self.orthogonal,
            Connectivity::Diagonal => &self.diagonal,
        }
    }
}
