//! Geometric primitives like points, sizes, and rectangles.

use num_traits::{Num, Zero};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A 2D point with generic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Point<T: Num + Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Num + Copy + Eq> Eq for Point<T> {}

impl<T: Num + Copy> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

/// A 2D size (width and height) with generic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Size<T: Num + Copy> {
    pub width: T,
    pub height: T,
}

impl<T: Num + Copy + Eq> Eq for Size<T> {}

impl<T: Num + Copy> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.width.is_zero() || self.height.is_zero()
    }
}

/// A 2D rectangle defined by an origin point (top-left corner) and a size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Rect<T: Num + Copy> {
    pub origin: Point<T>,
    pub size: Size<T>,
}

impl<T: Num + Copy + Eq> Eq for Rect<T> {}

impl<T: Num + Copy> Rect<T> {
    pub const fn new(origin: Point<T>, size: Size<T>) -> Self {
        Rect { origin, size }
    }

    pub const fn from_coords(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> T {
        self.origin.x
    }

    pub fn y(&self) -> T {
        self.origin.y
    }

    pub fn width(&self) -> T {
        self.size.width
    }

    pub fn height(&self) -> T {
        self.size.height
    }

    /// The x-coordinate of the right edge (origin.x + size.width).
    pub fn right(&self) -> T
    where
        T: Add<Output = T>,
    {
        self.origin.x + self.size.width
    }

    /// The y-coordinate of the bottom edge (origin.y + size.height).
    pub fn bottom(&self) -> T
    where
        T: Add<Output = T>,
    {
        self.origin.y + self.size.height
    }

    pub fn is_empty(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.size.is_empty()
    }

    /// Whether a point lies within the rectangle. The top and left edges are
    /// inclusive, the bottom and right edges exclusive.
    pub fn contains_point(&self, point: &Point<T>) -> bool
    where
        T: PartialOrd + Add<Output = T>,
    {
        point.x >= self.x() && point.x < self.right() && point.y >= self.y() && point.y < self.bottom()
    }
}

impl Rect<f64> {
    /// Shrinks the rectangle inward by `margin` on every side. Dimensions are
    /// floored at zero; the origin always moves by the full margin.
    pub fn inset(&self, margin: f64) -> Rect<f64> {
        Rect::from_coords(
            self.x() + margin,
            self.y() + margin,
            (self.width() - margin * 2.0).max(0.0),
            (self.height() - margin * 2.0).max(0.0),
        )
    }
}
