//! Edge functions for half-plane classification.

use crate::geometry::Point;

/// Linear function `f(x, y) = a·x + b·y + c` of one triangle edge, with the
/// inside sign fixed by a reference vertex.
///
/// For an edge `(p, q)`: `a = p.y - q.y`, `b = q.x - p.x`,
/// `c = p.x·q.y - q.x·p.y`. If `f(reference) >= 0` a point is inside when
/// `f >= 0`, otherwise when `f <= 0`.
///
/// Coefficients and values are `i128`, exact for any `i32` vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeFunction {
    a: i128,
    b: i128,
    c: i128,
    positive_inside: bool,
}

impl EdgeFunction {
    /// Build the edge function through `p` and `q`, oriented so that
    /// `reference` is inside.
    #[must_use]
    pub fn new(p: Point, q: Point, reference: Point) -> Self {
        let (px, py) = (i128::from(p.x), i128::from(p.y));
        let (qx, qy) = (i128::from(q.x), i128::from(q.y));
        let mut edge = Self { a: py - qy, b: qx - px, c: px * qy - qx * py, positive_inside: true };
        edge.positive_inside = edge.evaluate(reference) >= 0;
        edge
    }

    /// Signed value at a lattice point.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, point: Point) -> i128 {
        self.evaluate_at(i64::from(point.x), i64::from(point.y))
    }

    /// Signed value at `(x, y)`.
    #[inline]
    #[must_use]
    pub fn evaluate_at(&self, x: i64, y: i64) -> i128 {
        self.a * i128::from(x) + self.b * i128::from(y) + self.c
    }

    /// Change of the value per unit step in x.
    #[inline]
    #[must_use]
    pub const fn step_x(&self) -> i128 {
        self.a
    }

    /// Change of the value per unit step in y.
    #[inline]
    #[must_use]
    pub const fn step_y(&self) -> i128 {
        self.b
    }

    /// Whether a precomputed value lies on the inside half-plane (edge
    /// included).
    #[inline]
    #[must_use]
    pub const fn is_inside_value(&self, value: i128) -> bool {
        if self.positive_inside {
            value >= 0
        } else {
            value <= 0
        }
    }

    /// Whether a lattice point lies on the inside half-plane (edge included).
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.is_inside_value(self.evaluate(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients() {
        let edge = EdgeFunction::new(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
        // f = (0 - 0)x + (10 - 0)y + 0 = 10y
        assert_eq!(edge.evaluate(Point::new(3, 2)), 20);
        assert_eq!(edge.step_x(), 0);
        assert_eq!(edge.step_y(), 10);
    }

    #[test]
    fn test_orientation_follows_reference() {
        let above = EdgeFunction::new(Point::new(0, 0), Point::new(10, 0), Point::new(5, 5));
        let below = EdgeFunction::new(Point::new(0, 0), Point::new(10, 0), Point::new(5, -5));
        assert!(above.contains(Point::new(1, 1)));
        assert!(!above.contains(Point::new(1, -1)));
        assert!(below.contains(Point::new(1, -1)));
        assert!(!below.contains(Point::new(1, 1)));
    }

    #[test]
    fn test_edge_points_are_inside() {
        let edge = EdgeFunction::new(Point::new(0, 0), Point::new(4, 4), Point::new(4, 0));
        assert!(edge.contains(Point::new(2, 2)));
        assert_eq!(edge.evaluate(Point::new(2, 2)), 0);
    }

    #[test]
    fn test_reversed_edge_same_classification() {
        let p = Point::new(-3, 2);
        let q = Point::new(7, 9);
        let r = Point::new(5, -4);
        let forward = EdgeFunction::new(p, q, r);
        let backward = EdgeFunction::new(q, p, r);
        for x in -10..10 {
            for y in -10..10 {
                let pt = Point::new(x, y);
                assert_eq!(forward.contains(pt), backward.contains(pt));
            }
        }
    }

    #[test]
    fn test_extreme_vertices_exact() {
        let (lo, hi) = (i32::MIN, i32::MAX);
        let edge = EdgeFunction::new(Point::new(lo, lo), Point::new(hi, hi), Point::new(lo, hi));
        // f = span·(y - x) along the main diagonal
        let span = i128::from(hi) - i128::from(lo);
        assert_eq!(edge.evaluate(Point::new(hi, lo)), -span * span);
        assert_eq!(edge.evaluate(Point::new(lo, hi)), span * span);
        assert!(!edge.contains(Point::new(hi, lo)));
        assert!(edge.contains(Point::new(lo, hi)));
    }

    #[test]
    fn test_incremental_matches_direct() {
        let edge = EdgeFunction::new(Point::new(-5, 3), Point::new(8, -2), Point::new(0, 9));
        let mut value = edge.evaluate(Point::new(2, -6));
        for y in -6..6 {
            assert_eq!(value, edge.evaluate(Point::new(2, y)));
            value += edge.step_y();
        }
    }
}
