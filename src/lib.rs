//! # lattice-raster
//!
//! Integer scan conversion of lines, circles and triangles into lattice
//! points, plus normalization of those points into a bounded real range for
//! point renderers.
//!
//! ## Features
//!
//! - **Integer only**: Bresenham lines and midpoint circles never touch floating point
//! - **All octants**: explicit, reversible octant canonicalization
//! - **Exact fill**: edge-function triangle classification with an incremental scan
//! - **Validated inputs**: coordinate limits and radii are checked up front
//!
//! ## Quick Start
//!
//! ```rust
//! use lattice_raster::prelude::*;
//!
//! let rasterizer = Rasterizer::default();
//! let shape = Shape::filled_triangle(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
//!
//! let points = rasterizer.rasterize(&shape)?;
//! assert!(points.contains(&Point::new(1, 1)));
//!
//! // three floats per point: x / 100, y / 100, 0
//! let flat = rasterizer.render(&shape)?;
//! assert_eq!(flat.len(), points.len() * 3);
//! # Ok::<(), lattice_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/deserialize shapes, points and configuration
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pineda, J. (1988). "A Parallel Algorithm for Polygon Rasterization." SIGGRAPH '88.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Lattice and real-valued points, bounding boxes.
pub mod geometry;

/// Line, circle and triangle scan conversion.
pub mod raster;

/// Mapping of lattice points into normalized coordinates.
pub mod normalize;

// ============================================================================
// Parameters and Configuration
// ============================================================================

/// Rasterizer configuration.
pub mod config;

/// Shape parameter structs.
pub mod shape;

/// Validated rasterization entry point.
pub mod rasterizer;

// ============================================================================
// Preview Output
// ============================================================================

/// Color types.
pub mod color;

/// RGBA framebuffer.
pub mod framebuffer;

/// Software point rendering.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for lattice-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use lattice_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::RasterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{BoundingBox, Point, PointF};
    pub use crate::normalize::Normalizer;
    pub use crate::output::PngEncoder;
    pub use crate::raster::{
        fill_triangle, fill_triangle_exhaustive, rasterize_circle, rasterize_line,
        rasterize_triangle_outline, PointSequence,
    };
    pub use crate::rasterizer::Rasterizer;
    pub use crate::render::PointRenderer;
    pub use crate::shape::Shape;
}
