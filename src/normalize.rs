//! Mapping of lattice points into a bounded real-valued range.
//!
//! The output layout is three components per point (`x`, `y`, `z = 0`), the
//! homogeneous convention expected by point renderers.

use trueno::Vector;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Scale that maps the conventional `±100` lattice onto `[-1, 1]`.
pub const DEFAULT_SCALE: f32 = 100.0;

/// Divides every coordinate by a fixed, validated scale.
///
/// Every path multiplies by the cached reciprocal `1 / scale`, so single
/// points and flat buffers agree bit for bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    scale: f32,
    inv_scale: f32,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { scale: DEFAULT_SCALE, inv_scale: 1.0 / DEFAULT_SCALE }
    }
}

impl Normalizer {
    /// Create a normalizer dividing by `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScale`] if the scale is zero, NaN, infinite, or
    /// so small that its reciprocal overflows.
    pub fn new(scale: f32) -> Result<Self> {
        if !scale.is_finite() || scale == 0.0 {
            return Err(Error::InvalidScale(scale));
        }
        let inv_scale = 1.0 / scale;
        if !inv_scale.is_finite() {
            return Err(Error::InvalidScale(scale));
        }
        Ok(Self { scale, inv_scale })
    }

    /// The divisor.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// The normalizer that undoes this one.
    #[must_use]
    pub const fn inverse(&self) -> Self {
        Self { scale: self.inv_scale, inv_scale: self.scale }
    }

    /// Normalize a single lattice point to `[x / scale, y / scale, 0.0]`.
    #[must_use]
    pub fn normalize_point(&self, point: Point) -> [f32; 3] {
        [point.x as f32 * self.inv_scale, point.y as f32 * self.inv_scale, 0.0]
    }

    /// Normalize a point sequence, one triple per point.
    #[must_use]
    pub fn normalize(&self, points: &[Point]) -> Vec<[f32; 3]> {
        points.iter().map(|&p| self.normalize_point(p)).collect()
    }

    /// Normalize into an interleaved `x, y, z` buffer (`3 * points.len()`
    /// values).
    #[must_use]
    pub fn to_flat(&self, points: &[Point]) -> Vec<f32> {
        let raw: Vec<f32> =
            points.iter().flat_map(|p| [p.x as f32, p.y as f32, 0.0]).collect();
        self.rescale_flat(&raw)
    }

    /// Divide an already flat real buffer by the scale, via the reciprocal.
    ///
    /// Uses trueno's SIMD vector multiply, falling back to a scalar loop if
    /// the vector operation is rejected.
    #[must_use]
    pub fn rescale_flat(&self, values: &[f32]) -> Vec<f32> {
        if values.is_empty() {
            return Vec::new();
        }

        let data = Vector::from_vec(values.to_vec());
        let factor = Vector::from_vec(vec![self.inv_scale; values.len()]);
        match data.mul(&factor) {
            Ok(scaled) => scaled.as_slice().to_vec(),
            Err(_) => values.iter().map(|v| v * self.inv_scale).collect(),
        }
    }
}
