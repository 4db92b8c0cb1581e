//! Dense cell storage addressed through a [`MatrixIndexer`].

use std::fmt;

use thiserror::Error;

use crate::indexer::{Connectivity, IndexerError, MatrixIndexer};

/// Error type for building a [`Grid`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Input has no cells
    #[error("Grid input is empty")]
    Empty,
    /// A row's width differs from the first row
    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The cell converter rejected a character
    #[error("Invalid cell {cell:?} at ({x}, {y})")]
    InvalidCell { x: usize, y: usize, cell: char },
    /// Cell vector length does not match the indexer
    #[error("Expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },
    /// Indexer construction or lookup failed
    #[error("Indexer error: {0}")]
    Indexer(#[from] IndexerError),
}

/// A grid of cells stored in linear index order.
///
/// # Example
///
/// ```
/// use aoc_grid::{Connectivity, Grid};
///
/// let grid = Grid::parse_chars("#..\n.S.\n..#\n").unwrap();
/// assert_eq!((grid.width(), grid.height()), (3, 3));
///
/// let start = grid.position(|&c| c == 'S').unwrap();
/// assert_eq!(grid.indexer().index_to_coords(start as isize).unwrap(), vec![1, 1]);
///
/// let walls = grid
///     .neighbors(start, Connectivity::Diagonal)
///     .unwrap()
///     .into_iter()
///     .filter(|&(_, &c)| c == '#')
///     .count();
/// assert_eq!(walls, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    indexer: MatrixIndexer,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Pairs an existing cell vector with an indexer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCount`] if `cells.len()` differs from
    /// `indexer.len()`.
    pub fn from_cells(indexer: MatrixIndexer, cells: Vec<T>) -> Result<Self, GridError> {
        if cells.len() != indexer.len() {
            return Err(GridError::CellCount {
                expected: indexer.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { indexer, cells })
    }

    /// Parses text into a 2D grid, converting each character with `convert`.
    ///
    /// Blank lines around the text are ignored; every remaining line is one
    /// row and all rows must have the same width.
    pub fn parse_with<F>(text: &str, mut convert: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let rows: Vec<&str> = text
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .collect();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, cell) in row.chars().enumerate() {
                cells.push(convert(cell).ok_or(GridError::InvalidCell { x, y, cell })?);
            }
        }

        let indexer = MatrixIndexer::new([width, rows.len()])?;
        Ok(Self { indexer, cells })
    }

    pub fn indexer(&self) -> &MatrixIndexer {
        &self.indexer
    }

    /// Extent of axis 0
    pub fn width(&self) -> usize {
        self.indexer.extents()[0]
    }

    /// Extent of axis 1, or 1 for a one-dimensional grid
    pub fn height(&self) -> usize {
        self.indexer.extents().get(1).copied().unwrap_or(1)
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.cells.get_mut(index)
    }

    /// Looks a cell up by coordinates, normalising them through the indexer
    pub fn get_at(&self, coords: &[isize]) -> Result<&T, IndexerError> {
        let index = self.indexer.coords_to_index(coords)?;
        Ok(&self.cells[index])
    }

    /// Index of the first cell matching `predicate`
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.cells.iter().position(predicate)
    }

    /// Indices of all cells matching `predicate`
    pub fn positions<P>(&self, predicate: P) -> impl Iterator<Item = usize>
    where
        P: Fn(&T) -> bool,
    {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, cell)| predicate(cell))
            .map(|(index, _)| index)
    }

    /// Neighbouring cells of the cell at `index`, as `(index, cell)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`IndexerError::IndexOutOfRange`] if `index` is not a cell of
    /// this grid.
    pub fn neighbors(
        &self,
        index: usize,
        connectivity: Connectivity,
    ) -> Result<Vec<(usize, &T)>, IndexerError> {
        if index >= self.cells.len() {
            return Err(IndexerError::IndexOutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                len: self.cells.len(),
            });
        }
        // Cell count fits isize, checked when the indexer was built.
        let neighbors = self
            .indexer
            .neighbor_indices_of_index(index as isize, connectivity)?;
        Ok(neighbors
            .into_iter()
            .map(|neighbor| (neighbor, &self.cells[neighbor]))
            .collect())
    }
}

impl Grid<char> {
    /// Parses text into a grid of characters
    pub fn parse_chars(text: &str) -> Result<Self, GridError> {
        Self::parse_with(text, Some)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width()).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
