//! Validated entry point that rasterizes and normalizes [`Shape`]s.

use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::normalize::Normalizer;
use crate::raster::{
    fill_triangle, rasterize_circle, rasterize_line, rasterize_triangle_outline, PointSequence,
};
use crate::shape::Shape;

/// Rasterizer bound to a validated configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rasterizer {
    config: RasterConfig,
    normalizer: Normalizer,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self { config: RasterConfig::default(), normalizer: Normalizer::default() }
    }
}

impl Rasterizer {
    /// Create a rasterizer, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not build.
    pub fn new(config: RasterConfig) -> Result<Self> {
        let config = config.build()?;
        let normalizer = config.normalizer()?;
        Ok(Self { config, normalizer })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// The normalizer derived from the configuration.
    #[must_use]
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Check a shape's inputs without rasterizing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeRadius`] for a circle with negative radius and
    /// [`Error::CoordinateOutOfRange`] when any control point (or a circle's
    /// extent) exceeds the coordinate limit.
    pub fn validate(&self, shape: &Shape) -> Result<()> {
        let limit = i64::from(self.config.limit());
        for point in shape.control_points() {
            check_point(point, limit)?;
        }

        if let Shape::Circle { centre, radius } = *shape {
            if radius < 0 {
                return Err(Error::NegativeRadius(radius));
            }
            let r = i64::from(radius);
            for extent in [
                i64::from(centre.x) - r,
                i64::from(centre.x) + r,
                i64::from(centre.y) - r,
                i64::from(centre.y) + r,
            ] {
                check_coordinate(extent, limit)?;
            }
        }
        Ok(())
    }

    /// Validate and scan-convert a shape into lattice points.
    ///
    /// # Errors
    ///
    /// See [`Rasterizer::validate`].
    pub fn rasterize(&self, shape: &Shape) -> Result<PointSequence> {
        self.validate(shape)?;
        let points = match *shape {
            Shape::Line { from, to } => rasterize_line(from, to),
            Shape::Circle { centre, radius } => rasterize_circle(centre, radius)?,
            Shape::TriangleOutline { vertices: [a, b, c] } => rasterize_triangle_outline(a, b, c),
            Shape::FilledTriangle { vertices: [a, b, c] } => fill_triangle(a, b, c),
        };
        Ok(points)
    }

    /// Rasterize and normalize into an interleaved `x, y, z` buffer.
    ///
    /// The point count is `len / 3`.
    ///
    /// # Errors
    ///
    /// See [`Rasterizer::validate`].
    pub fn render(&self, shape: &Shape) -> Result<Vec<f32>> {
        let points = self.rasterize(shape)?;
        Ok(self.normalizer.to_flat(&points))
    }
}

fn check_point(point: Point, limit: i64) -> Result<()> {
    check_coordinate(i64::from(point.x), limit)?;
    check_coordinate(i64::from(point.y), limit)
}

fn check_coordinate(value: i64, limit: i64) -> Result<()> {
    if value.abs() > limit {
        return Err(Error::CoordinateOutOfRange { value, limit });
    }
    Ok(())
}
