//! Neighbour enumeration.

use super::error::IndexerError;
use super::matrix::MatrixIndexer;
use super::offsets::Connectivity;

impl MatrixIndexer {
    /// Returns the coordinates of all neighbours of `coords`.
    ///
    /// On a bounded grid, neighbours outside the grid are dropped. In wrap
    /// mode every offset is kept and neighbours are returned relative to the
    /// normalised input, so they may lie one step outside the extents; they
    /// normalise when passed back into the indexer.
    ///
    /// # Errors
    ///
    /// Fails if `coords` is not a valid coordinate vector.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_grid::{Connectivity, MatrixIndexer};
    ///
    /// let indexer = MatrixIndexer::new([3, 3]).unwrap();
    ///
    /// let interior = indexer.neighbor_coords(&[1, 1], Connectivity::Diagonal).unwrap();
    /// let corner = indexer.neighbor_coords(&[0, 0], Connectivity::Diagonal).unwrap();
    /// assert_eq!(interior.len(), 8);
    /// assert_eq!(corner.len(), 3);
    /// ```
    pub fn neighbor_coords(
        &self,
        coords: &[isize],
        connectivity: Connectivity,
    ) -> Result<Vec<Vec<isize>>, IndexerError> {
        let origin = self.normalize_coords(coords)?;
        Ok(self
            .offsets(connectivity)
            .iter()
            .filter_map(|offset| {
                // Origin is in range here, adding a unit offset cannot overflow.
                let neighbor: Vec<isize> = origin
                    .iter()
                    .zip(offset)
                    .map(|(&value, &delta)| value + delta)
                    .collect();
                (self.is_wrapping() || self.in_bounds(&neighbor)).then_some(neighbor)
            })
            .collect())
    }

    /// Returns the linear indices of all neighbours of `coords`.
    pub fn neighbor_indices(
        &self,
        coords: &[isize],
        connectivity: Connectivity,
    ) -> Result<Vec<usize>, IndexerError> {
        self.neighbor_coords(coords, connectivity)?
            .iter()
            .map(|neighbor| self.coords_to_index(neighbor))
            .collect()
    }

    /// Returns the coordinates of all neighbours of the cell at `index`.
    pub fn neighbor_coords_of_index(
        &self,
        index: isize,
        connectivity: Connectivity,
    ) -> Result<Vec<Vec<isize>>, IndexerError> {
        let coords = self.index_to_coords(index)?;
        self.neighbor_coords(&coords, connectivity)
    }

    /// Returns the linear indices of all neighbours of the cell at `index`.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_grid::{Connectivity, MatrixIndexer};
    ///
    /// let indexer = MatrixIndexer::wrapping([3, 3]).unwrap();
    ///
    /// let neighbors = indexer.neighbor_indices_of_index(0, Connectivity::Orthogonal).unwrap();
    /// assert_eq!(neighbors, vec![2, 6, 3, 1]);
    /// ```
    pub fn neighbor_indices_of_index(
        &self,
        index: isize,
        connectivity: Connectivity,
    ) -> Result<Vec<usize>, IndexerError> {
        let coords = self.index_to_coords(index)?;
        self.neighbor_indices(&coords, connectivity)
    }

    /// Applies every offset to `coords` without validating or filtering.
    ///
    /// The input may lie anywhere, including off the grid, and all resulting
    /// coordinates are returned as-is. Only the vector length is checked.
    /// Offsets that would overflow `isize` are skipped.
    pub fn neighbor_coords_unbounded(
        &self,
        coords: &[isize],
        connectivity: Connectivity,
    ) -> Result<Vec<Vec<isize>>, IndexerError> {
        self.check_dimensions(coords.len())?;
        Ok(self
            .offsets(connectivity)
            .iter()
            .filter_map(|offset| {
                coords
                    .iter()
                    .zip(offset)
                    .map(|(&value, &delta)| value.checked_add(delta))
                    .collect::<Option<Vec<isize>>>()
            })
            .collect())
    }
}
