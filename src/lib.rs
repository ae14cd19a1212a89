//! # gridmap - Quadtree Grid Map
//!
//! A 2D spatial index for integer points. Each point carries an `i32` value and
//! lives at `(x, y)` inside a rectangular region fixed when the map is built.
//! The map answers "which values lie within radius `r` of `(x, y)`?" and
//! inclusive rectangle queries.
//!
//! ## Features
//!
//! - **Adaptive Subdivision**: leaves split into four quadrants once they hold
//!   more than `threshold` points
//! - **Bounded Depth**: at most `max_depth` splits along any path; deeper leaves
//!   simply grow
//! - **Exact Integer Geometry**: circle tests use squared distances, no floating point
//! - **Pruned Search**: subtrees whose region misses the query are skipped
//!
//! ## Quick Start
//!
//! ```rust
//! use gridmap::prelude::*;
//!
//! // threshold 3, depth 2, 10 x 10 cells at the origin
//! let mut map = GridMap::new(3, 2, 0, 0, 10, 10)?;
//! map.add(1, 1, 100)?;
//! map.add(9, 9, 200)?;
//!
//! // Values within radius 2 of (1, 1)
//! assert_eq!(map.query(1, 1, 2), vec![100]);
//!
//! // Reuse one buffer across queries
//! let mut results = Vec::new();
//! map.query_into(5, 5, 20, &mut results);
//! results.sort();
//! assert_eq!(results, vec![100, 200]);
//!
//! // Points outside the region are rejected, not dropped
//! assert!(matches!(
//!     map.add(20, 20, 300),
//!     Err(GridMapError::OutOfBounds { x: 20, y: 20, .. })
//! ));
//! # Ok::<(), GridMapError>(())
//! ```
//!
//! ## How It Works
//!
//! Every node covers a half-open region. A leaf stores its points in a vector;
//! when it overflows and still has depth budget, it bisects its region at the
//! midpoint (odd extents give the extra cell to the west and south halves),
//! creates four child leaves and moves its points into them. Queries descend
//! only into children whose region touches the query shape.
//!
//! The map is single-threaded plain data. Wrap it in a lock to share it between
//! writers.

mod config;
mod error;
mod grid_map;
mod node;
mod point;
pub mod prelude;
mod region;


pub use config::GridMapConfig;
pub use error::{GridMapError, Result};
pub use grid_map::GridMap;
pub use node::TreeStats;
pub use point::Point;
pub use region::{Quadrant, Region};
