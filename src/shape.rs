//! Explicit shape parameters passed into each rasterization call.

use crate::error::Result;
use crate::geometry::{round_component, Point, PointF};

/// A primitive to scan-convert, with all of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Segment between two endpoints.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Circumference of a circle.
    Circle {
        /// Centre point.
        centre: Point,
        /// Radius; negative values are rejected.
        radius: i32,
    },
    /// The three edges of a triangle.
    TriangleOutline {
        /// Triangle corners.
        vertices: [Point; 3],
    },
    /// Every lattice point inside a triangle.
    FilledTriangle {
        /// Triangle corners.
        vertices: [Point; 3],
    },
}

impl Shape {
    /// Create a line shape.
    #[must_use]
    pub const fn line(from: Point, to: Point) -> Self {
        Self::Line { from, to }
    }

    /// Create a circle shape.
    #[must_use]
    pub const fn circle(centre: Point, radius: i32) -> Self {
        Self::Circle { centre, radius }
    }

    /// Create a triangle outline shape.
    #[must_use]
    pub const fn triangle_outline(a: Point, b: Point, c: Point) -> Self {
        Self::TriangleOutline { vertices: [a, b, c] }
    }

    /// Create a filled triangle shape.
    #[must_use]
    pub const fn filled_triangle(a: Point, b: Point, c: Point) -> Self {
        Self::FilledTriangle { vertices: [a, b, c] }
    }

    /// Line between real-valued endpoints, each rounded to the nearest
    /// lattice point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`](crate::Error::NonFiniteCoordinate)
    /// for NaN or infinite input and
    /// [`Error::CoordinateOutOfRange`](crate::Error::CoordinateOutOfRange) when
    /// a rounded value does not fit in an `i32`.
    pub fn line_from_real(from: PointF, to: PointF) -> Result<Self> {
        Ok(Self::line(from.to_lattice()?, to.to_lattice()?))
    }

    /// Circle with a real-valued centre and radius, both rounded.
    ///
    /// A negative radius is kept and rejected when rasterized.
    ///
    /// # Errors
    ///
    /// See [`Shape::line_from_real`].
    pub fn circle_from_real(centre: PointF, radius: f32) -> Result<Self> {
        Ok(Self::circle(centre.to_lattice()?, round_component(radius)?))
    }

    /// Triangle outline with real-valued corners.
    ///
    /// # Errors
    ///
    /// See [`Shape::line_from_real`].
    pub fn triangle_outline_from_real(vertices: [PointF; 3]) -> Result<Self> {
        let [a, b, c] = snap(vertices)?;
        Ok(Self::triangle_outline(a, b, c))
    }

    /// Filled triangle with real-valued corners.
    ///
    /// # Errors
    ///
    /// See [`Shape::line_from_real`].
    pub fn filled_triangle_from_real(vertices: [PointF; 3]) -> Result<Self> {
        let [a, b, c] = snap(vertices)?;
        Ok(Self::filled_triangle(a, b, c))
    }

    /// Input points that must lie within the configured coordinate range.
    #[must_use]
    pub fn control_points(&self) -> Vec<Point> {
        match *self {
            Self::Line { from, to } => vec![from, to],
            Self::Circle { centre, .. } => vec![centre],
            Self::TriangleOutline { vertices } | Self::FilledTriangle { vertices } => {
                vertices.to_vec()
            }
        }
    }

    /// Short name of the shape kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::TriangleOutline { .. } => "triangle-outline",
            Self::FilledTriangle { .. } => "filled-triangle",
        }
    }
}

fn snap([a, b, c]: [PointF; 3]) -> Result<[Point; 3]> {
    Ok([a.to_lattice()?, b.to_lattice()?, c.to_lattice()?])
}
