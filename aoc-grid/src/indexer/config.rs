//! Indexer configuration and builder

use super::error::IndexerError;
use super::matrix::MatrixIndexer;

/// Plain description of an indexer: its extents and whether it wraps.
///
/// This is what a [`MatrixIndexer`] is built from, and what
/// [`MatrixIndexer::config`] hands back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexerConfig {
    /// Extent of each axis, fastest-varying axis first
    pub extents: Vec<usize>,
    /// Treat the grid as a torus
    #[cfg_attr(feature = "serde", serde(default))]
    pub wrap: bool,
}

/// Builder for constructing a [`MatrixIndexer`] with a fluent API
///
/// # Example
///
/// ```
/// use aoc_grid::MatrixIndexer;
///
/// let indexer = MatrixIndexer::builder()
///     .extent(10)
///     .extent(4)
///     .wrap(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(indexer.len(), 40);
/// assert_eq!(indexer.coords_to_index(&[-1, 0]).unwrap(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatrixIndexerBuilder {
    config: IndexerConfig,
}

impl MatrixIndexerBuilder {
    /// Create a builder with no extents and wrap mode off
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all extents at once
    pub fn extents(mut self, extents: impl Into<Vec<usize>>) -> Self {
        self.config.extents = extents.into();
        self
    }

    /// Append one axis
    pub fn extent(mut self, extent: usize) -> Self {
        self.config.extents.push(extent);
        self
    }

    /// Enable or disable wrap-around addressing
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.config.wrap = wrap;
        self
    }

    /// Build the indexer
    ///
    /// # Errors
    ///
    /// Returns an error if no extents were given, an extent is zero, or the
    /// total cell count overflows.
    pub fn build(self) -> Result<MatrixIndexer, IndexerError> {
        MatrixIndexer::from_config(self.config)
    }
}

impl From<IndexerConfig> for MatrixIndexerBuilder {
    fn from(config: IndexerConfig) -> Self {
        Self { config }
    }
}
