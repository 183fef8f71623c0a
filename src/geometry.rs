//! Core geometry types: Offset, Size, Region.
//!
//! All widget placement is absolute, in integer pixels. These types carry the
//! positions of widgets, the bounds of their hit-test rectangles, and the
//! placement of rendered text inside those bounds.

use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D point or displacement in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Offset {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl From<(i32, i32)> for Offset {
    fn from((x, y): (i32, i32)) -> Self {
        Offset { x, y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Place this size at `origin`, producing a [`Region`].
    #[inline]
    pub const fn at(self, origin: Offset) -> Region {
        Region { x: origin.x, y: origin.y, width: self.width, height: self.height }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangle defined by its top-left corner and size.
///
/// Edges follow the half-open convention: a point on `right()` or `bottom()`
/// is outside the region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The top-left corner as an [`Offset`].
    #[inline]
    pub const fn offset(self) -> Offset {
        Offset { x: self.x, y: self.y }
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// The center point, rounded towards the top-left.
    #[inline]
    pub const fn center(self) -> Offset {
        Offset { x: self.x + self.width / 2, y: self.y + self.height / 2 }
    }

    /// Whether the point lies inside this region.
    #[inline]
    pub const fn contains(self, point: Offset) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Whether `other` is entirely contained within this region.
    #[inline]
    pub const fn contains_region(self, other: Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// The same region moved so that its top-left corner is `origin`.
    #[inline]
    pub const fn with_offset(self, origin: Offset) -> Region {
        Region { x: origin.x, y: origin.y, width: self.width, height: self.height }
    }

    /// The same region resized, keeping its top-left corner.
    #[inline]
    pub const fn with_size(self, size: Size) -> Region {
        Region { x: self.x, y: self.y, width: size.width, height: size.height }
    }

    /// The same region moved so that its center is `center`.
    #[inline]
    pub const fn centered_on(self, center: Offset) -> Region {
        Region {
            x: center.x - self.width / 2,
            y: center.y - self.height / 2,
            width: self.width,
            height: self.height,
        }
    }

    /// Translate the region by an [`Offset`].
    #[inline]
    pub const fn translate(self, delta: Offset) -> Region {
        Region { x: self.x + delta.x, y: self.y + delta.y, width: self.width, height: self.height }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
