//! Linear index and coordinate conversion.

use log::{debug, trace};

use super::config::{IndexerConfig, MatrixIndexerBuilder};
use super::error::IndexerError;
use super::offsets::{Connectivity, NeighborOffsets};

/// Index arithmetic for a uniform N-dimensional rectangular grid.
///
/// Cells are stored axis 0 first: for a text grid the extents are
/// `[width, height]`, coordinates are `[x, y]` and the linear index of a cell
/// is `x + y * width`.
///
/// In wrap mode the grid behaves like a torus. Every index and coordinate is
/// valid and gets mapped back into range with floor-style modulo, so `-1` on
/// an axis of extent `10` addresses `9`.
///
/// # Example
///
/// ```
/// use aoc_grid::{Connectivity, MatrixIndexer};
///
/// let indexer = MatrixIndexer::new([4, 3]).unwrap();
///
/// assert_eq!(indexer.coords_to_index(&[1, 2]).unwrap(), 9);
/// assert_eq!(indexer.index_to_coords(9).unwrap(), vec![1, 2]);
///
/// // Corner cell only has two orthogonal neighbours in bounded mode
/// let neighbors = indexer.neighbor_coords(&[0, 0], Connectivity::Orthogonal).unwrap();
/// assert_eq!(neighbors, vec![vec![0, 1], vec![1, 0]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixIndexer {
    extents: Vec<usize>,
    strides: Vec<usize>,
    len: usize,
    wrap: bool,
    offsets: NeighborOffsets,
}

impl MatrixIndexer {
    /// Create a bounded indexer over the given extents
    pub fn new(extents: impl Into<Vec<usize>>) -> Result<Self, IndexerError> {
        Self::builder().extents(extents).build()
    }

    /// Create a wrap-around indexer over the given extents
    pub fn wrapping(extents: impl Into<Vec<usize>>) -> Result<Self, IndexerError> {
        Self::builder().extents(extents).wrap(true).build()
    }

    /// Create a builder for configuring an indexer
    pub fn builder() -> MatrixIndexerBuilder {
        MatrixIndexerBuilder::new()
    }

    /// Create an indexer from a plain configuration
    ///
    /// # Errors
    ///
    /// - [`IndexerError::NoDimensions`] if `extents` is empty
    /// - [`IndexerError::ZeroExtent`] if any extent is zero
    /// - [`IndexerError::TooManyCells`] if the cell count does not fit `isize`
    pub fn from_config(config: IndexerConfig) -> Result<Self, IndexerError> {
        let IndexerConfig { extents, wrap } = config;

        if extents.is_empty() {
            return Err(IndexerError::NoDimensions);
        }
        if let Some(axis) = extents.iter().position(|&extent| extent == 0) {
            return Err(IndexerError::ZeroExtent { axis });
        }

        let mut strides = Vec::with_capacity(extents.len());
        let mut len = 1_usize;
        for &extent in &extents {
            strides.push(len);
            len = len
                .checked_mul(extent)
                .ok_or(IndexerError::TooManyCells)?;
        }
        // Index inputs are signed, every cell must be reachable by one.
        if isize::try_from(len).is_err() {
            return Err(IndexerError::TooManyCells);
        }

        debug!(
            "Built {}-dimensional indexer over {:?} ({} cells, wrap: {})",
            extents.len(),
            extents,
            len,
            wrap
        );

        let offsets = NeighborOffsets::new(extents.len());
        Ok(Self {
            extents,
            strides,
            len,
            wrap,
            offsets,
        })
    }

    /// Configuration this indexer was built from
    pub fn config(&self) -> IndexerConfig {
        IndexerConfig {
            extents: self.extents.clone(),
            wrap: self.wrap,
        }
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction rejects zero extents
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extent of each axis
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Linear distance between neighbouring cells along each axis
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of axes
    pub fn dimensions(&self) -> usize {
        self.extents.len()
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrap
    }

    /// Relative offsets used by neighbour queries
    pub fn offsets(&self, connectivity: Connectivity) -> &[Vec<isize>] {
        self.offsets.get(connectivity)
    }

    /// Checks whether `index` addresses a cell.
    ///
    /// Always true in wrap mode.
    pub fn is_valid_index(&self, index: isize) -> bool {
        self.wrap || (0..self.len as isize).contains(&index)
    }

    /// Checks whether `coords` addresses a cell.
    ///
    /// The vector must have one value per axis. In wrap mode any values are
    /// accepted, otherwise each must lie within its axis extent.
    pub fn is_valid_coords(&self, coords: &[isize]) -> bool {
        coords.len() == self.dimensions() && (self.wrap || self.in_bounds(coords))
    }

    /// Converts a linear index into a coordinate vector.
    ///
    /// # Errors
    ///
    /// Returns [`IndexerError::IndexOutOfRange`] for an index outside
    /// `0..len()` on a bounded grid.
    pub fn index_to_coords(&self, index: isize) -> Result<Vec<isize>, IndexerError> {
        let normalized = if self.wrap {
            index.rem_euclid(self.len as isize) as usize
        } else if self.is_valid_index(index) {
            index as usize
        } else {
            trace!("Rejected index {} on {} cells", index, self.len);
            return Err(IndexerError::IndexOutOfRange {
                index,
                len: self.len,
            });
        };
        Ok(self.decompose(normalized))
    }

    /// Converts a coordinate vector into a linear index.
    ///
    /// # Errors
    ///
    /// - [`IndexerError::DimensionMismatch`] if `coords` has the wrong length
    /// - [`IndexerError::CoordinateOutOfRange`] if an axis is out of range on
    ///   a bounded grid
    pub fn coords_to_index(&self, coords: &[isize]) -> Result<usize, IndexerError> {
        let normalized = self.normalize_coords(coords)?;
        Ok(normalized
            .iter()
            .zip(&self.strides)
            .map(|(&value, &stride)| value as usize * stride)
            .sum())
    }

    /// Maps a coordinate vector into range.
    ///
    /// In wrap mode every axis is reduced with floor-style modulo; on a
    /// bounded grid the coordinates are returned unchanged if valid.
    pub fn normalize_coords(&self, coords: &[isize]) -> Result<Vec<isize>, IndexerError> {
        self.check_dimensions(coords.len())?;
        coords
            .iter()
            .enumerate()
            .map(|(axis, &value)| self.normalize_axis(axis, value))
            .collect()
    }

    /// Moves `coords` by `delta`.
    ///
    /// Returns `Ok(None)` when the target falls off a bounded grid. In wrap
    /// mode the target is always returned, normalised into range.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_grid::{Direction, MatrixIndexer};
    ///
    /// let indexer = MatrixIndexer::new([3, 3]).unwrap();
    /// let up = Direction::TOP.offset().unwrap();
    ///
    /// assert_eq!(indexer.step(&[1, 1], &up).unwrap(), Some(vec![1, 0]));
    /// assert_eq!(indexer.step(&[1, 0], &up).unwrap(), None);
    /// ```
    pub fn step(
        &self,
        coords: &[isize],
        delta: &[isize],
    ) -> Result<Option<Vec<isize>>, IndexerError> {
        let origin = self.normalize_coords(coords)?;
        self.check_dimensions(delta.len())?;

        let mut target = Vec::with_capacity(origin.len());
        for ((&value, &offset), &extent) in origin.iter().zip(delta).zip(&self.extents) {
            let moved = if self.wrap {
                (value as i128 + offset as i128).rem_euclid(extent as i128) as isize
            } else {
                match value.checked_add(offset) {
                    Some(moved) if (0..extent as isize).contains(&moved) => moved,
                    _ => return Ok(None),
                }
            };
            target.push(moved);
        }
        Ok(Some(target))
    }

    /// Moves the cell at `index` by `delta`, see [`step`](Self::step).
    pub fn step_index(&self, index: isize, delta: &[isize]) -> Result<Option<usize>, IndexerError> {
        let coords = self.index_to_coords(index)?;
        self.step(&coords, delta)?
            .map(|target| self.coords_to_index(&target))
            .transpose()
    }

    /// Iterates over the coordinates of every cell in linear index order
    pub fn iter_coords(&self) -> impl Iterator<Item = Vec<isize>> + '_ {
        (0..self.len).map(|index| self.decompose(index))
    }

    pub(super) fn in_bounds(&self, coords: &[isize]) -> bool {
        coords
            .iter()
            .zip(&self.extents)
            .all(|(&value, &extent)| (0..extent as isize).contains(&value))
    }

    pub(super) fn check_dimensions(&self, actual: usize) -> Result<(), IndexerError> {
        if actual == self.dimensions() {
            Ok(())
        } else {
            Err(IndexerError::DimensionMismatch {
                expected: self.dimensions(),
                actual,
            })
        }
    }

    fn normalize_axis(&self, axis: usize, value: isize) -> Result<isize, IndexerError> {
        let extent = self.extents[axis];
        if self.wrap {
            Ok(value.rem_euclid(extent as isize))
        } else if (0..extent as isize).contains(&value) {
            Ok(value)
        } else {
            trace!("Rejected coordinate {} on axis {} of extent {}", value, axis, extent);
            Err(IndexerError::CoordinateOutOfRange {
                axis,
                value,
                extent,
            })
        }
    }

    /// Splits an in-range index, most significant axis first.
    fn decompose(&self, mut remainder: usize) -> Vec<isize> {
        let mut coords = vec![0; self.strides.len()];
        for (coord, &stride) in coords.iter_mut().zip(&self.strides).rev() {
            *coord = (remainder / stride) as isize;
            remainder %= stride;
        }
        coords
    }
}
