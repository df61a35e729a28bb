//! Scan conversion of lines, circles and triangles into lattice points.
//!
//! All functions are pure: each call allocates a fresh [`PointSequence`] in
//! generation order and shares no state with other calls.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer incremental error over all eight octants
//! - **Midpoint Circle**: one octant with an integer decision variable, mirrored 8 ways
//! - **Edge-function Fill**: half-plane tests over the triangle's bounding box
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pineda, J. (1988). "A Parallel Algorithm for Polygon Rasterization." SIGGRAPH '88.

mod circle;
mod edge;
mod fill;
mod line;
mod octant;

use crate::geometry::Point;

/// Lattice points of a rasterized primitive in generation order.
///
/// Order is not spatial and may contain duplicates (circle octant seams).
pub type PointSequence = Vec<Point>;

pub use circle::{circle_mirrors, rasterize_circle};
pub use edge::EdgeFunction;
pub use fill::{fill_triangle, fill_triangle_exhaustive, fill_triangle_with_stats, FillStats};
pub use line::{rasterize_line, rasterize_polyline, rasterize_triangle_outline};
pub use octant::OctantTransform;
