//! Grid helpers for Advent of Code puzzles
//!
//! Many puzzles hand over a block of text that is really a grid of cells. This
//! crate provides the index arithmetic for such grids in any number of
//! dimensions, plus a couple of conveniences built on top of it.
//!
//! # Overview
//!
//! - [`MatrixIndexer`]: converts between linear indices and coordinate vectors,
//!   validates them and enumerates neighbours, optionally wrapping around the
//!   edges like a torus
//! - [`Direction`]: planar direction bitmask with turning and unit offsets
//! - [`Grid`]: cell storage parsed from puzzle text and addressed through an
//!   indexer
//!
//! # Quick Example
//!
//! ```
//! use aoc_grid::{Connectivity, Direction, Grid};
//!
//! let grid = Grid::parse_chars("\
//! ..#..
//! .#...
//! ..^..
//! ").unwrap();
//!
//! let indexer = grid.indexer();
//! let start = grid.position(|&c| c == '^').unwrap();
//! let mut position = indexer.index_to_coords(start as isize).unwrap();
//! let mut facing = Direction::TOP;
//!
//! // Walk forward, turning right in front of walls, until leaving the grid
//! let mut steps = 0;
//! while let Some(next) = indexer.step(&position, &facing.offset().unwrap()).unwrap() {
//!     if grid.get_at(&next).unwrap() == &'#' {
//!         facing = facing.turn_right();
//!         continue;
//!     }
//!     position = next;
//!     steps += 1;
//! }
//! assert_eq!(steps, 3);
//! assert_eq!(facing, Direction::RIGHT);
//!
//! let open = grid
//!     .neighbors(start, Connectivity::Orthogonal)
//!     .unwrap()
//!     .into_iter()
//!     .filter(|&(_, &c)| c == '.')
//!     .count();
//! assert_eq!(open, 3);
//! ```

pub mod direction;
pub mod grid;
pub mod indexer;

// Re-export public API
pub use direction::{Direction, InvalidDirection};
pub use grid::{Grid, GridError};
pub use indexer::{Connectivity, IndexerConfig, IndexerError, MatrixIndexer, MatrixIndexerBuilder};
