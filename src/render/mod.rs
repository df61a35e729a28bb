//! Software point rendering of normalized point sets.
//!
//! Mirrors what a GPU point-list draw call does with a fixed point size and
//! color, so rasterizer output can be inspected without a graphics context.

mod points;

pub use points::PointRenderer;
