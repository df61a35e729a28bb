//! Bresenham line rasterization.
//!
//! Segments are canonicalized into the first octant with [`OctantTransform`],
//! stepped with the integer incremental error and mapped back.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use super::octant::OctantTransform;
use super::PointSequence;
use crate::geometry::Point;

/// Rasterize the segment between two lattice points.
///
/// Every emitted point lies within half a unit of the ideal segment along the
/// driving axis. Both endpoints are always present; `from == to` yields a
/// single point.
#[must_use]
pub fn rasterize_line(from: Point, to: Point) -> PointSequence {
    if from == to {
        return vec![from];
    }

    let (transform, (x0, y0), (x1, y1)) = OctantTransform::canonicalize(from, to);
    let dx = x1 - x0;
    let dy = y1 - y0;

    // canonical points lie between the endpoints, so restoring never fails
    let mut points = Vec::with_capacity(dx as usize + 1);
    points.extend(transform.restore((x0, y0)));

    let mut error = 2 * dy - dx;
    let mut y = y0;
    for x in x0 + 1..x1 {
        if error <= 0 {
            error += 2 * dy;
        } else {
            error += 2 * dy - 2 * dx;
            y += 1;
        }
        points.extend(transform.restore((x, y)));
    }
    points.extend(transform.restore((x1, y1)));
    points
}

/// Rasterize a chain of segments through `vertices`.
///
/// When `closed` is set the last vertex is joined back to the first. Shared
/// vertices are emitted once per adjoining segment.
#[must_use]
pub fn rasterize_polyline(vertices: &[Point], closed: bool) -> PointSequence {
    let mut points = PointSequence::new();
    if let [only] = vertices {
        points.push(*only);
        return points;
    }

    for pair in vertices.windows(2) {
        points.extend(rasterize_line(pair[0], pair[1]));
    }
    if closed && vertices.len() > 2 {
        if let (Some(&last), Some(&first)) = (vertices.last(), vertices.first()) {
            points.extend(rasterize_line(last, first));
        }
    }
    points
}

/// Rasterize the three edges of a triangle: `a→b`, `b→c`, `c→a`.
#[must_use]
pub fn rasterize_triangle_outline(a: Point, b: Point, c: Point) -> PointSequence {
    rasterize_polyline(&[a, b, c], true)
}
