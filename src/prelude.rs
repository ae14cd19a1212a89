//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use gridmap::prelude::*;
//! ```

pub use crate::{GridMap, GridMapConfig, GridMapError, Point, Region};
