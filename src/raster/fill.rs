//! Triangle scan fill by edge functions.
//!
//! A lattice point of the half-open bounding box is inside when all three
//! edge functions classify it as inside (edges included).
//! [`fill_triangle_exhaustive`] evaluates every point directly and serves as
//! the reference; [`fill_triangle`] produces the same points in the same
//! order by stepping edge values incrementally down each column.

use super::edge::EdgeFunction;
use super::PointSequence;
use crate::geometry::{BoundingBox, Point};

/// Coverage of a fill relative to its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillStats {
    /// Points classified inside.
    pub inside: u64,
    /// Lattice points in the bounding box.
    pub scanned: u64,
}

impl FillStats {
    /// Fraction of the bounding box that was filled, `0.0` for an empty box.
    #[must_use]
    pub fn coverage(&self) -> f64 {
        if self.scanned == 0 {
            0.0
        } else {
            self.inside as f64 / self.scanned as f64
        }
    }
}

/// Bounding box and oriented edges of a non-degenerate triangle.
///
/// `None` when the triangle has zero area or the box holds no lattice point.
fn setup(a: Point, b: Point, c: Point) -> Option<(BoundingBox, [EdgeFunction; 3])> {
    let bbox = BoundingBox::from_points(&[a, b, c])?;
    if bbox.is_empty() {
        return None;
    }

    let edges = [EdgeFunction::new(b, a, c), EdgeFunction::new(c, b, a), EdgeFunction::new(c, a, b)];
    // f_ba(c) is twice the signed area
    if edges[0].evaluate(c) == 0 {
        return None;
    }
    Some((bbox, edges))
}

/// Fill a triangle, testing every lattice point of the bounding box.
///
/// Points are emitted column by column (x outer, y inner).
#[must_use]
pub fn fill_triangle_exhaustive(a: Point, b: Point, c: Point) -> PointSequence {
    let Some((bbox, edges)) = setup(a, b, c) else {
        return PointSequence::new();
    };

    let mut points = PointSequence::new();
    for x in bbox.min_x..bbox.max_x {
        for y in bbox.min_y..bbox.max_y {
            let p = Point::new(x, y);
            if edges.iter().all(|e| e.contains(p)) {
                points.push(p);
            }
        }
    }
    points
}

/// Fill a triangle with per-column incremental edge evaluation.
///
/// Classification and output order match [`fill_triangle_exhaustive`].
#[must_use]
pub fn fill_triangle(a: Point, b: Point, c: Point) -> PointSequence {
    fill_triangle_with_stats(a, b, c).0
}

/// Like [`fill_triangle`], also reporting how much of the bounding box was
/// covered.
#[must_use]
pub fn fill_triangle_with_stats(a: Point, b: Point, c: Point) -> (PointSequence, FillStats) {
    let Some((bbox, edges)) = setup(a, b, c) else {
        let scanned = BoundingBox::from_points(&[a, b, c]).map_or(0, |bbox| bbox.area());
        return (PointSequence::new(), FillStats { inside: 0, scanned });
    };

    let mut points = PointSequence::new();
    let min_y = i64::from(bbox.min_y);

    for x in bbox.min_x..bbox.max_x {
        let x_wide = i64::from(x);
        let mut values = edges.map(|e| e.evaluate_at(x_wide, min_y));
        let mut entered = false;

        for y in bbox.min_y..bbox.max_y {
            let inside = edges.iter().zip(&values).all(|(e, &v)| e.is_inside_value(v));
            if inside {
                entered = true;
                points.push(Point::new(x, y));
            } else if entered {
                // a column crosses a convex region in one run
                break;
            }
            for (value, edge) in values.iter_mut().zip(&edges) {
                *value += edge.step_y();
            }
        }
    }

    let stats = FillStats { inside: points.len() as u64, scanned: bbox.area() };
    (points, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_triangle() {
        let points = fill_triangle(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
        assert!(points.contains(&Point::new(1, 1)));
        assert!(points.contains(&Point::new(0, 0)));
        assert!(!points.contains(&Point::new(20, 20)));
        assert!(!points.contains(&Point::new(9, 9)));
        // x + y <= 10 within [0,10) x [0,10)
        assert_eq!(points.len(), 64);
    }

    #[test]
    fn test_matches_exhaustive() {
        let tris = [
            (Point::new(-90, 20), Point::new(90, 70), Point::new(10, -50)),
            (Point::new(90, 90), Point::new(-50, 20), Point::new(-8, 100)),
            (Point::new(0, 0), Point::new(1, 7), Point::new(13, 2)),
            (Point::new(5, 5), Point::new(-5, 5), Point::new(0, -5)),
        ];
        for (a, b, c) in tris {
            assert_eq!(fill_triangle(a, b, c), fill_triangle_exhaustive(a, b, c));
        }
    }

    #[test]
    fn test_winding_does_not_matter() {
        let ccw = fill_triangle(Point::new(0, 0), Point::new(8, 2), Point::new(3, 9));
        let cw = fill_triangle(Point::new(0, 0), Point::new(3, 9), Point::new(8, 2));
        assert_eq!(ccw, cw);
        assert!(!ccw.is_empty());
    }

    #[test]
    fn test_collinear_is_empty() {
        let points = fill_triangle(Point::new(0, 0), Point::new(5, 5), Point::new(10, 10));
        assert!(points.is_empty());
        let points = fill_triangle_exhaustive(Point::new(0, 0), Point::new(5, 5), Point::new(10, 10));
        assert!(points.is_empty());
    }

    #[test]
    fn test_coincident_vertices_empty() {
        let p = Point::new(3, 3);
        assert!(fill_triangle(p, p, p).is_empty());
        assert!(fill_triangle(p, p, Point::new(9, 1)).is_empty());
    }

    #[test]
    fn test_extreme_coordinates() {
        let (lo, hi) = (i32::MIN, i32::MAX);
        assert!(fill_triangle(Point::new(lo, lo), Point::new(0, 0), Point::new(hi, hi)).is_empty());

        let (a, b, c) = (Point::new(hi - 4, hi - 4), Point::new(hi, hi - 4), Point::new(hi - 4, hi));
        let corner = fill_triangle(a, b, c);
        assert_eq!(corner, fill_triangle_exhaustive(a, b, c));
        // x + y <= 4 over [0, 4) x [0, 4) relative to the corner
        assert_eq!(corner.len(), 13);
        assert!(corner.contains(&Point::new(hi - 4, hi - 1)));
    }

    #[test]
    fn test_flat_bounding_box_empty() {
        let (points, stats) =
            fill_triangle_with_stats(Point::new(0, 4), Point::new(6, 4), Point::new(12, 4));
        assert!(points.is_empty());
        assert_eq!(stats.scanned, 0);
        assert!(stats.coverage().abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats() {
        let (points, stats) =
            fill_triangle_with_stats(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
        assert_eq!(stats.inside, points.len() as u64);
        assert_eq!(stats.scanned, 100);
        assert!((stats.coverage() - 0.64).abs() < 1e-9);
    }

    #[test]
    fn test_column_major_order() {
        let points = fill_triangle(Point::new(0, 0), Point::new(3, 0), Point::new(0, 3));
        let expected: Vec<Point> = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)]
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        assert_eq!(points, expected);
    }
}
