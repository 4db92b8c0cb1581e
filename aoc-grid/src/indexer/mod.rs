//! N-dimensional Matrix Indexer
//!
//! This module converts between linear cell indices and coordinate vectors for
//! uniform rectangular grids of any dimensionality, and enumerates the
//! neighbours of a cell.
//!
//! # Addressing Modes
//!
//! - **Bounded** ([`MatrixIndexer::new`]): indices must lie in `0..len()` and
//!   coordinates within their axis extent. Out-of-range queries return an
//!   [`IndexerError`]; out-of-range neighbours are dropped.
//! - **Wrapping** ([`MatrixIndexer::wrapping`]): the grid is a torus. Every
//!   index and coordinate is accepted and mapped into range with floor-style
//!   modulo, including negative values.
//!
//! # Neighbour Tables
//!
//! Relative offsets are computed once per indexer:
//! - [`Connectivity::Orthogonal`]: `2N` offsets, one axis changes by one
//! - [`Connectivity::Diagonal`]: `3^N - 1` offsets, any combination of axes
//!
//! # Example: Bounded 2D grid
//!
//! ```rust
//! use aoc_grid::{Connectivity, MatrixIndexer};
//!
//! // 5 columns, 4 rows
//! let indexer = MatrixIndexer::new([5, 4]).unwrap();
//! assert_eq!(indexer.len(), 20);
//! assert_eq!(indexer.strides(), &[1, 5]);
//!
//! let index = indexer.coords_to_index(&[3, 2]).unwrap();
//! assert_eq!(index, 13);
//!
//! let neighbors = indexer.neighbor_indices(&[3, 2], Connectivity::Orthogonal).unwrap();
//! assert_eq!(neighbors, vec![12, 8, 18, 14]);
//!
//! assert!(indexer.coords_to_index(&[5, 0]).is_err());
//! ```
//!
//! # Example: Wrapping 3D grid
//!
//! ```rust
//! use aoc_grid::{Connectivity, MatrixIndexer};
//!
//! let indexer = MatrixIndexer::wrapping([3, 3, 3]).unwrap();
//!
//! assert_eq!(indexer.coords_to_index(&[-1, -1, -1]).unwrap(), 26);
//! assert_eq!(indexer.index_to_coords(-1).unwrap(), vec![2, 2, 2]);
//!
//! // Every cell of a torus has the full neighbourhood
//! let neighbors = indexer.neighbor_coords(&[0, 0, 0], Connectivity::Diagonal).unwrap();
//! assert_eq!(neighbors.len(), 26);
//! ```

mod config;
mod error;
mod matrix;
mod neighbors;
mod offsets;

pub use config::{IndexerConfig, MatrixIndexerBuilder};
pub use error::IndexerError;
pub use matrix::MatrixIndexer;
pub use offsets::Connectivity;
