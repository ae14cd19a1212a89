//! Axis-aligned integer regions and their quadrant split.
//!
//! A [`Region`] is half-open: it covers `origin_x <= x < origin_x + width` and
//! `origin_y <= y < origin_y + height`. Edges are computed in `u64`, so a region
//! may reach the very end of the `u32` coordinate space.

use std::fmt;

use crate::error::{GridMapError, Result};

/// Exclusive upper bound of the coordinate space (`u32::MAX + 1`).
const COORD_LIMIT: u64 = 1 << 32;

/// One of the four sub-rectangles produced by bisecting a region.
///
/// North is the higher-y half, west the lower-x half.
#[expect(clippy::exhaustive_enums, reason = "a region has exactly four quadrants")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Low x, high y.
    NorthWest,
    /// High x, high y.
    NorthEast,
    /// Low x, low y.
    SouthWest,
    /// High x, low y.
    SouthEast,
}

impl Quadrant {
    /// All quadrants in child storage order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }

    const fn from_halves(east: bool, north: bool) -> Self {
        match (north, east) {
            (true, false) => Self::NorthWest,
            (true, true) => Self::NorthEast,
            (false, false) => Self::SouthWest,
            (false, true) => Self::SouthEast,
        }
    }
}

/// Half-open axis-aligned rectangle over `u32` coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    origin_x: u32,
    origin_y: u32,
    width: u32,
    height: u32,
}

impl Region {
    /// Creates a region anchored at `(origin_x, origin_y)`.
    ///
    /// # Errors
    /// Returns [`GridMapError::InvalidConfiguration`] when `width` or `height`
    /// is zero, or when the region would extend past `u32::MAX`.
    ///
    /// # Example
    /// ```
    /// use gridmap::Region;
    /// let region = Region::new(0, 0, 10, 10).unwrap();
    /// assert!(region.contains(9, 9));
    /// assert!(!region.contains(10, 9));
    /// ```
    pub fn new(origin_x: u32, origin_y: u32, width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(GridMapError::InvalidConfiguration {
                reason: "width must be greater than zero",
            });
        }
        if height == 0 {
            return Err(GridMapError::InvalidConfiguration {
                reason: "height must be greater than zero",
            });
        }
        if u64::from(origin_x) + u64::from(width) > COORD_LIMIT
            || u64::from(origin_y) + u64::from(height) > COORD_LIMIT
        {
            return Err(GridMapError::InvalidConfiguration {
                reason: "region extends past the u32 coordinate space",
            });
        }
        Ok(Self {
            origin_x,
            origin_y,
            width,
            height,
        })
    }

    /// Left edge.
    pub fn origin_x(&self) -> u32 {
        self.origin_x
    }

    /// Bottom edge.
    pub fn origin_y(&self) -> u32 {
        self.origin_y
    }

    /// Extent along x.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Extent along y.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of integer cells covered.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[inline]
    fn end_x(&self) -> u64 {
        u64::from(self.origin_x) + u64::from(self.width)
    }

    #[inline]
    fn end_y(&self) -> u64 {
        u64::from(self.origin_y) + u64::from(self.height)
    }

    /// Returns true if `(x, y)` lies inside the half-open rectangle.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.origin_x
            && y >= self.origin_y
            && u64::from(x) < self.end_x()
            && u64::from(y) < self.end_y()
    }

    /// Returns true if the closed disk of radius `r` around `(cx, cy)` touches
    /// this rectangle.
    ///
    /// The center is clamped to `[origin, origin + extent]` on each axis and the
    /// squared distance to the clamped point is compared with `r²`, so the test
    /// is exact for integer inputs.
    ///
    /// # Example
    /// ```
    /// use gridmap::Region;
    /// let region = Region::new(10, 10, 10, 10).unwrap();
    /// assert!(region.intersects_circle(5, 15, 5));
    /// assert!(!region.intersects_circle(5, 15, 4));
    /// ```
    #[inline]
    pub fn intersects_circle(&self, cx: u32, cy: u32, r: u32) -> bool {
        let closest_x = u64::from(cx).clamp(u64::from(self.origin_x), self.end_x());
        let closest_y = u64::from(cy).clamp(u64::from(self.origin_y), self.end_y());
        distance_squared(u64::from(cx), u64::from(cy), closest_x, closest_y) <= radius_squared(r)
    }

    /// Returns true if this region shares any cell with the inclusive rectangle
    /// `[min_x, max_x] x [min_y, max_y]`.
    #[inline]
    pub fn intersects_rect(&self, min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> bool {
        u64::from(min_x) < self.end_x()
            && max_x >= self.origin_x
            && u64::from(min_y) < self.end_y()
            && max_y >= self.origin_y
    }

    /// Returns true if every cell of this region lies in the inclusive rectangle
    /// `[min_x, max_x] x [min_y, max_y]`.
    #[inline]
    pub fn within_rect(&self, min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> bool {
        self.origin_x >= min_x
            && self.origin_y >= min_y
            && self.end_x() <= u64::from(max_x) + 1
            && self.end_y() <= u64::from(max_y) + 1
    }

    /// A region can be bisected only when both extents are at least 2, so that
    /// no quadrant ends up empty.
    pub fn can_split(&self) -> bool {
        self.width >= 2 && self.height >= 2
    }

    /// Width of the west half. Odd extents give the extra unit to the west.
    #[inline]
    fn west_width(&self) -> u32 {
        self.width - self.width / 2
    }

    /// Height of the south half. Odd extents give the extra unit to the south.
    #[inline]
    fn south_height(&self) -> u32 {
        self.height - self.height / 2
    }

    /// The four quadrants in [`Quadrant::ALL`] order, or `None` if the region
    /// is too thin to split.
    ///
    /// The quadrants tile `self` exactly: no gaps and no overlap.
    ///
    /// # Example
    /// ```
    /// use gridmap::{Quadrant, Region};
    /// let region = Region::new(0, 0, 5, 4).unwrap();
    /// let quads = region.quadrants().unwrap();
    /// let sw = quads[Quadrant::SouthWest.index()];
    /// assert_eq!((sw.width(), sw.height()), (3, 2));
    /// ```
    pub fn quadrants(&self) -> Option<[Self; 4]> {
        if !self.can_split() {
            return None;
        }
        let west = self.west_width();
        let east = self.width / 2;
        let south = self.south_height();
        let north = self.height / 2;
        // origin + west < origin + width <= 2^32, so the sums stay in range.
        let mid_x = self.origin_x + west;
        let mid_y = self.origin_y + south;
        let make = |origin_x, origin_y, width, height| Self {
            origin_x,
            origin_y,
            width,
            height,
        };
        Some([
            make(self.origin_x, mid_y, west, north),
            make(mid_x, mid_y, east, north),
            make(self.origin_x, self.origin_y, west, south),
            make(mid_x, self.origin_y, east, south),
        ])
    }

    /// A single quadrant; `None` if the region is too thin to split.
    pub fn quadrant(&self, quadrant: Quadrant) -> Option<Self> {
        self.quadrants().map(|quads| quads[quadrant.index()])
    }

    /// Quadrant that holds `(x, y)`, using the same midpoint as
    /// [`Region::quadrants`]. The point is assumed to lie inside `self`.
    #[inline]
    pub fn quadrant_of(&self, x: u32, y: u32) -> Quadrant {
        debug_assert!(self.contains(x, y), "({x}, {y}) is outside {self}");
        let east = u64::from(x) >= u64::from(self.origin_x) + u64::from(self.west_width());
        let north = u64::from(y) >= u64::from(self.origin_y) + u64::from(self.south_height());
        Quadrant::from_halves(east, north)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.origin_x,
            self.end_x(),
            self.origin_y,
            self.end_y()
        )
    }
}

/// Squared Euclidean distance between two integer points.
#[inline]
pub(crate) fn distance_squared(ax: u64, ay: u64, bx: u64, by: u64) -> u128 {
    let dx = u128::from(ax.abs_diff(bx));
    let dy = u128::from(ay.abs_diff(by));
    dx * dx + dy * dy
}

#[inline]
pub(crate) fn radius_squared(r: u32) -> u128 {
    let r = u128::from(r);
    r * r
}
