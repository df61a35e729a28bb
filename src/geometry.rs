//! Geometric primitives for scan conversion.
//!
//! Provides lattice points, real-valued points and half-open bounding boxes.

use std::ops::{Add, Sub};

use crate::error::{Error, Result};

/// A 2D lattice point with integer coordinates.
///
/// Rasterizers widen to `i64` internally, so any `i32` coordinate within the
/// configured limit can be used without intermediate overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance, exact for any pair of `i32` points.
    #[must_use]
    pub fn squared_distance(self, other: Self) -> i128 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        dx * dx + dy * dy
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D point with floating-point coordinates, as produced by continuous
/// inputs such as UI sliders. Snapped onto the lattice with
/// [`PointF::to_lattice`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointF {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl PointF {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round to the nearest lattice point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`] for NaN or infinite components and
    /// [`Error::CoordinateOutOfRange`] when a rounded component does not fit in
    /// an `i32`.
    pub fn to_lattice(self) -> Result<Point> {
        Ok(Point::new(round_component(self.x)?, round_component(self.y)?))
    }
}

/// Round a real coordinate to the nearest `i32`.
pub(crate) fn round_component(value: f32) -> Result<i32> {
    if !value.is_finite() {
        return Err(Error::NonFiniteCoordinate);
    }
    let rounded = f64::from(value).round();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(Error::CoordinateOutOfRange {
            value: rounded as i64,
            limit: i64::from(i32::MAX),
        });
    }
    Ok(rounded as i32)
}

/// Axis-aligned half-open box `[min_x, max_x) × [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    /// Inclusive lower x bound.
    pub min_x: i32,
    /// Exclusive upper x bound.
    pub max_x: i32,
    /// Inclusive lower y bound.
    pub min_y: i32,
    /// Exclusive upper y bound.
    pub max_y: i32,
}

impl BoundingBox {
    /// Smallest box spanning the given points, with the maximum edges
    /// excluded. Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self { min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y };
        Some(points[1..].iter().fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> u64 {
        (i64::from(self.max_x) - i64::from(self.min_x)).max(0) as u64
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> u64 {
        (i64::from(self.max_y) - i64::from(self.min_y)).max(0) as u64
    }

    /// Number of lattice points covered.
    #[must_use]
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// True when the box covers no lattice point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Check if a point lies inside the half-open box.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x && point.x < self.max_x && point.y >= self.min_y && point.y < self.max_y
    }
}
