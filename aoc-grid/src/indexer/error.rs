//! Error types for the matrix indexer

use thiserror::Error;

/// Error type for building and querying a [`MatrixIndexer`](super::MatrixIndexer)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexerError {
    /// No extents were given
    #[error("Indexer needs at least one dimension")]
    NoDimensions,
    /// An axis was given an extent of zero
    #[error("Extent of axis {axis} must be positive")]
    ZeroExtent { axis: usize },
    /// The product of all extents does not fit the index type
    #[error("Total cell count overflows the index type")]
    TooManyCells,
    /// A coordinate or delta vector has the wrong number of axes
    #[error("Expected {expected} coordinates, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// A linear index lies outside a bounded grid
    #[error("Index {index} is out of range for {len} cells")]
    IndexOutOfRange { index: isize, len: usize },
    /// A coordinate lies outside a bounded grid
    #[error("Coordinate {value} on axis {axis} is out of range 0..{extent}")]
    CoordinateOutOfRange {
        axis: usize,
        value: isize,
        extent: usize,
    },
}
