//! The public grid map: a fixed region indexed by a quadtree of partition nodes.

use tracing::{debug, trace};

use crate::config::GridMapConfig;
use crate::error::Result;
use crate::node::{PartitionNode, TreeStats};
use crate::point::Point;
use crate::region::Region;

/// Spatial index over integer points in a fixed rectangular region.
///
/// Leaves hold up to `threshold` points; a leaf that overflows splits into
/// four quadrants until `max_depth` splits have happened along its path, after
/// which it keeps every further point.
///
/// # Example
/// ```
/// use gridmap::GridMap;
///
/// let mut map = GridMap::new(3, 2, 0, 0, 10, 10).unwrap();
/// map.add(1, 1, 100).unwrap();
/// map.add(9, 9, 200).unwrap();
///
/// assert_eq!(map.query(1, 1, 2), vec![100]);
///
/// let mut both = map.query(5, 5, 20);
/// both.sort();
/// assert_eq!(both, vec![100, 200]);
///
/// assert!(map.add(20, 20, 300).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GridMap {
    root: PartitionNode,
    config: GridMapConfig,
    len: usize,
}

impl GridMap {
    /// Creates an empty grid map over `width x height` cells starting at
    /// `(origin_x, origin_y)`.
    ///
    /// # Errors
    /// Returns [`GridMapError::InvalidConfiguration`](crate::GridMapError::InvalidConfiguration)
    /// when `threshold` is zero, the region is empty, or the region extends
    /// past the `u32` coordinate space.
    pub fn new(
        threshold: usize,
        max_depth: u32,
        origin_x: u32,
        origin_y: u32,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        Self::from_config(GridMapConfig {
            threshold,
            max_depth,
            origin_x,
            origin_y,
            width,
            height,
        })
    }

    /// Creates an empty grid map from a configuration.
    ///
    /// # Errors
    /// Same as [`GridMap::new`].
    ///
    /// # Example
    /// ```
    /// use gridmap::{GridMap, GridMapConfig};
    /// let map = GridMap::from_config(GridMapConfig::default().with_extent(256, 256)).unwrap();
    /// assert!(map.is_empty());
    /// ```
    pub fn from_config(config: GridMapConfig) -> Result<Self> {
        let region = config.validate()?;
        debug!(
            %region,
            threshold = config.threshold,
            max_depth = config.max_depth,
            "creating grid map"
        );
        Ok(Self {
            root: PartitionNode::new(region, config.threshold, config.max_depth),
            config,
            len: 0,
        })
    }

    /// Stores `value` at `(x, y)`.
    ///
    /// # Errors
    /// Returns [`GridMapError::OutOfBounds`](crate::GridMapError::OutOfBounds)
    /// if the point lies outside the region; the map is unchanged.
    pub fn add(&mut self, x: u32, y: u32, value: i32) -> Result<()> {
        self.add_point(Point::new(x, y, value))
    }

    /// Stores a prepared [`Point`].
    ///
    /// # Errors
    /// Same as [`GridMap::add`].
    pub fn add_point(&mut self, point: Point) -> Result<()> {
        if let Err(err) = self.root.insert(point) {
            debug!(x = point.x(), y = point.y(), "rejected point: {err}");
            return Err(err);
        }
        self.len += 1;
        trace!(x = point.x(), y = point.y(), value = point.value(), "added point");
        Ok(())
    }

    /// Values of all points within Euclidean distance `radius` of `(x, y)`.
    ///
    /// Order is deterministic for a given sequence of adds but otherwise
    /// unspecified. A zero radius matches only points at exactly `(x, y)`.
    pub fn query(&self, x: u32, y: u32, radius: u32) -> Vec<i32> {
        let mut results = Vec::new();
        self.root.query(x, y, radius, &mut results);
        results
    }

    /// Like [`GridMap::query`], but appends into `results` (not cleared
    /// first) so one buffer can serve many queries.
    pub fn query_into(&self, x: u32, y: u32, radius: u32, results: &mut Vec<i32>) {
        self.root.query(x, y, radius, results);
    }

    /// Full entries of all points within `radius` of `(x, y)`.
    pub fn query_points(&self, x: u32, y: u32, radius: u32) -> Vec<Point> {
        let mut results = Vec::new();
        self.root
            .visit_circle(x, y, radius, &mut |point| results.push(*point));
        results
    }

    /// Values of all points inside the inclusive rectangle
    /// `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// An inverted rectangle (`min > max` on either axis) matches nothing.
    ///
    /// # Example
    /// ```
    /// use gridmap::GridMap;
    /// let mut map = GridMap::new(2, 4, 0, 0, 64, 64).unwrap();
    /// for i in 0..8 {
    ///     map.add(i * 8, i * 8, i as i32).unwrap();
    /// }
    /// let mut inside = map.query_rect(8, 8, 24, 24);
    /// inside.sort();
    /// assert_eq!(inside, vec![1, 2, 3]);
    /// ```
    pub fn query_rect(&self, min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Vec<i32> {
        let mut results = Vec::new();
        if min_x <= max_x && min_y <= max_y {
            self.root
                .visit_rect(min_x, min_y, max_x, max_y, &mut |point| results.push(point.value()));
        }
        results
    }

    /// Every stored point, in the same order a whole-region query would
    /// return them.
    pub fn points(&self) -> Vec<Point> {
        let mut results = Vec::with_capacity(self.len);
        self.root.visit_all(&mut |point| results.push(*point));
        results
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no point has been added.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The region fixed at construction.
    pub fn region(&self) -> Region {
        self.root.region()
    }

    /// The configuration this map was built from.
    pub fn config(&self) -> &GridMapConfig {
        &self.config
    }

    /// Node and depth counts for the current tree.
    pub fn stats(&self) -> TreeStats {
        self.root.stats()
    }

    /// Drops every point and returns the tree to a single empty leaf.
    pub fn clear(&mut self) {
        self.root = PartitionNode::new(self.root.region(), self.config.threshold, self.config.max_depth);
        self.len = 0;
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &PartitionNode {
        &self.root
    }
}
