//! Octant canonicalization for line stepping.
//!
//! Any segment is mapped to the first octant (left to right, non-decreasing
//! y, `dx >= dy`) before stepping. The transform is kept as an explicit value
//! so the inverse is applied in exactly the reverse order of the forward pass.
//!
//! Canonical coordinates are `i64`: negating `i32::MIN` has no `i32` result.

use crate::geometry::Point;

/// A lattice point widened to `i64`, as used in canonical space.
pub type WidePoint = (i64, i64);

/// Flags recording which reflections were applied to reach the first octant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OctantTransform {
    /// Endpoints were exchanged so traversal runs left to right.
    pub swapped_endpoints: bool,
    /// Both y coordinates were negated so y is non-decreasing.
    pub flipped_y: bool,
    /// x and y were exchanged so x is the driving axis.
    pub swapped_xy: bool,
}

impl OctantTransform {
    /// Compute the transform for a segment and return it together with the
    /// canonical endpoints.
    ///
    /// The steep test uses the absolute deltas of the original segment; the
    /// endpoint swap and y flip do not change them.
    #[must_use]
    pub fn canonicalize(from: Point, to: Point) -> (Self, WidePoint, WidePoint) {
        let dx = (i64::from(to.x) - i64::from(from.x)).abs();
        let dy = (i64::from(to.y) - i64::from(from.y)).abs();

        let mut transform = Self::default();
        let (mut from, mut to) = (from, to);
        if from.x > to.x {
            transform.swapped_endpoints = true;
            std::mem::swap(&mut from, &mut to);
        }
        transform.flipped_y = from.y > to.y;
        transform.swapped_xy = dy > dx;

        (transform, transform.apply(from), transform.apply(to))
    }

    /// Apply the per-point part of the forward transform.
    #[must_use]
    pub fn apply(&self, point: Point) -> WidePoint {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        let y = if self.flipped_y { -y } else { y };
        if self.swapped_xy {
            (y, x)
        } else {
            (x, y)
        }
    }

    /// Map a canonical point back to the caller's coordinate space.
    ///
    /// Inverts [`OctantTransform::apply`]: the x/y swap is undone before the y
    /// flip. Returns `None` when the result does not fit in an `i32`, which
    /// cannot happen for points between two canonicalized endpoints.
    #[must_use]
    pub fn restore(&self, (x, y): WidePoint) -> Option<Point> {
        let (x, y) = if self.swapped_xy { (y, x) } else { (x, y) };
        let y = if self.flipped_y { -y } else { y };
        Some(Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
    }
}
