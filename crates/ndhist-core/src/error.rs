//! Error types for histogram construction and filling
//!
//! Provides a unified error type for all ndhist crates. Coordinates that have
//! no bin are not errors: lookups report them as `None` and fills drop them.

use thiserror::Error;

/// Core error type for axis and histogram operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Axis parameters that cannot describe a valid binning
    #[error("Invalid axis configuration: {0}")]
    InvalidAxisConfiguration(String),

    /// Batched fill with a different number of coordinates and weights
    #[error("Mismatched batch sizes: {coords} coordinates, {weights} weights")]
    MismatchedBatchSizes { coords: usize, weights: usize },

    /// Two histograms whose binnings cannot be combined
    #[error("Incompatible axes: {0}")]
    IncompatibleAxes(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an axis configuration error
    pub fn invalid_axis(reason: impl Into<String>) -> Self {
        Self::InvalidAxisConfiguration(reason.into())
    }

    /// Create an error for a batched fill with unequal input lengths
    pub fn batch_mismatch(coords: usize, weights: usize) -> Self {
        Self::MismatchedBatchSizes { coords, weights }
    }

    /// Create an error for histograms with differing binning in one dimension
    pub fn incompatible_dimension(dim: usize) -> Self {
        Self::IncompatibleAxes(format!("binning differs in dimension {dim}"))
    }
}
