//! Midpoint circle rasterization.
//!
//! One octant is generated with an integer decision variable and mirrored
//! into the other seven.

use super::PointSequence;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// The eight points symmetric to `(x, y)` around `centre`.
///
/// Order: `(+x,+y) (-x,+y) (+x,-y) (-x,-y) (+y,+x) (-y,+x) (+y,-x) (-y,-x)`.
/// Mirrors coincide on the axes and diagonals; they are not deduplicated.
///
/// # Errors
///
/// Returns [`Error::CoordinateOutOfRange`] if a mirror falls outside `i32`.
pub fn circle_mirrors(centre: Point, x: i32, y: i32) -> Result<[Point; 8]> {
    let (cx, cy) = (i64::from(centre.x), i64::from(centre.y));
    let (x, y) = (i64::from(x), i64::from(y));
    let offsets = [(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)];

    let mut mirrors = [centre; 8];
    for (mirror, (ox, oy)) in mirrors.iter_mut().zip(offsets) {
        *mirror = Point::new(narrow(cx + ox)?, narrow(cy + oy)?);
    }
    Ok(mirrors)
}

fn narrow(value: i64) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| Error::CoordinateOutOfRange { value, limit: i64::from(i32::MAX) })
}

/// Rasterize the circumference of a circle.
///
/// Radius 0 yields eight copies of the centre.
///
/// # Errors
///
/// Returns [`Error::NegativeRadius`] if `radius < 0` and
/// [`Error::CoordinateOutOfRange`] if `centre ± radius` leaves the `i32`
/// range.
pub fn rasterize_circle(centre: Point, radius: i32) -> Result<PointSequence> {
    if radius < 0 {
        return Err(Error::NegativeRadius(radius));
    }

    // the first step reaches the extremes centre ± radius
    let first = circle_mirrors(centre, 0, radius)?;

    // roughly r / sqrt(2) steps of 8 points each
    let mut points = Vec::with_capacity(8 * (radius as usize * 3 / 4 + 2));
    points.extend(first);

    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * i64::from(y);

    while x < y {
        if d < 0 {
            d += 4 * i64::from(x) + 6;
        } else {
            d += 4 * (i64::from(x) - i64::from(y)) + 10;
            y -= 1;
        }
        x += 1;
        points.extend(circle_mirrors(centre, x, y)?);
    }

    Ok(points)
}
