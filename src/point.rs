//! The record stored in the grid map.

use crate::region::distance_squared;

/// An immutable `(x, y, value)` entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: u32,
    y: u32,
    value: i32,
}

impl Point {
    /// Creates a point carrying `value` at `(x, y)`.
    pub const fn new(x: u32, y: u32, value: i32) -> Self {
        Self { x, y, value }
    }

    /// X coordinate.
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Y coordinate.
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Stored value.
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Squared Euclidean distance to `(x, y)`.
    #[inline]
    pub fn distance_squared_to(&self, x: u32, y: u32) -> u128 {
        distance_squared(
            u64::from(self.x),
            u64::from(self.y),
            u64::from(x),
            u64::from(y),
        )
    }
}
