//! Error type for the caller-facing noise layer.
//!
//! The kernel in `simplex-utils` cannot fail; errors only arise when parsing settings,
//! when coordinates arrive as a runtime-sized slice, or when a grid is too large.

use thiserror::Error;

/// An error that can occur while configuring or dispatching a noise sampler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// The orientation name is not known for this dimensionality.
    #[error("Unknown {dimensions}D orientation: {name:?}")]
    UnknownOrientation {
        /// Dimensionality the name was parsed for.
        dimensions: usize,
        /// The name as given.
        name: String,
    },
    /// The coordinate count does not match the sampler.
    #[error("Expected {expected} coordinates, got {actual}")]
    DimensionMismatch {
        /// Dimensionality of the sampler.
        expected: usize,
        /// Number of coordinates supplied.
        actual: usize,
    },
    /// A grid's sample buffer is too large to allocate.
    #[error("Grid of {width} x {height} samples is too large")]
    GridTooLarge {
        /// Samples per row.
        width: usize,
        /// Number of rows.
        height: usize,
    },
    /// Noise settings could not be parsed.
    #[error("Invalid noise settings: {0}")]
    Settings(String),
}
