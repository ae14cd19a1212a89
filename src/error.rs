//! Error types for grid map construction and insertion.

use thiserror::Error;

use crate::region::Region;

/// Result alias used throughout the crate.
pub type Result<T, E = GridMapError> = std::result::Result<T, E>;

/// Failures reported by [`GridMap`](crate::GridMap) operations.
///
/// Queries never fail; only construction and insertion can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GridMapError {
    /// Constructor arguments were rejected. Nothing was built.
    #[error("invalid grid map configuration: {reason}")]
    InvalidConfiguration {
        /// Which precondition failed.
        reason: &'static str,
    },

    /// A point was offered outside the region fixed at construction.
    /// The index is left unchanged.
    #[error("point ({x}, {y}) lies outside the indexed region {region}")]
    OutOfBounds {
        /// Rejected x coordinate.
        x: u32,
        /// Rejected y coordinate.
        y: u32,
        /// Region of the node that rejected the point.
        region: Region,
    },
}

impl GridMapError {
    /// Returns true for [`GridMapError::OutOfBounds`].
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
