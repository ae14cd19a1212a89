//! Construction parameters for a [`GridMap`](crate::GridMap).

use crate::error::{GridMapError, Result};
use crate::region::Region;

/// Parameters fixed when a grid map is built.
///
/// The defaults (threshold 5, depth 10, a 10 x 10 region at the origin) suit
/// small demos; real callers set the region to their own extent.
///
/// # Example
/// ```
/// use gridmap::GridMapConfig;
/// let config = GridMapConfig::default()
///     .with_threshold(8)
///     .with_max_depth(6)
///     .with_extent(1024, 768);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridMapConfig {
    /// Points a leaf may hold before it tries to split. Must be at least 1.
    pub threshold: usize,
    /// Number of splits allowed along any root-to-leaf path.
    pub max_depth: u32,
    /// Left edge of the indexed region.
    pub origin_x: u32,
    /// Bottom edge of the indexed region.
    pub origin_y: u32,
    /// Extent along x. Must be non-zero.
    pub width: u32,
    /// Extent along y. Must be non-zero.
    pub height: u32,
}

impl Default for GridMapConfig {
    fn default() -> Self {
        Self {
            threshold: 5,
            max_depth: 10,
            origin_x: 0,
            origin_y: 0,
            width: 10,
            height: 10,
        }
    }
}

impl GridMapConfig {
    /// Sets the leaf threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the maximum depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Moves the region origin.
    #[must_use]
    pub fn with_origin(mut self, origin_x: u32, origin_y: u32) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Resizes the region.
    #[must_use]
    pub fn with_extent(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Checks every precondition and returns the root region.
    ///
    /// # Errors
    /// Returns [`GridMapError::InvalidConfiguration`] when the threshold is
    /// zero or the region is empty or does not fit the `u32` coordinate space.
    pub fn validate(&self) -> Result<Region> {
        if self.threshold == 0 {
            return Err(GridMapError::InvalidConfiguration {
                reason: "threshold must be at least 1",
            });
        }
        Region::new(self.origin_x, self.origin_y, self.width, self.height)
    }
}
