//! Rasterizer configuration.

use crate::error::{Error, Result};
use crate::normalize::{Normalizer, DEFAULT_SCALE};

/// Largest accepted coordinate limit. Edge-function products of coordinates
/// this large stay far inside `i64`.
pub const MAX_COORDINATE_LIMIT: i32 = 1_000_000;

/// Builder-style configuration for [`crate::rasterizer::Rasterizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterConfig {
    coordinate_limit: i32,
    scale: f32,
    point_size: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterConfig {
    /// Create a configuration with defaults: coordinates within `±10_000`,
    /// normalization scale `100.0`, 3 pixel points.
    #[must_use]
    pub fn new() -> Self {
        Self { coordinate_limit: 10_000, scale: DEFAULT_SCALE, point_size: 3 }
    }

    /// Set the absolute coordinate bound accepted for shape inputs.
    #[must_use]
    pub fn coordinate_limit(mut self, limit: i32) -> Self {
        self.coordinate_limit = limit;
        self
    }

    /// Set the normalization divisor.
    #[must_use]
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the preview point size in pixels.
    #[must_use]
    pub fn point_size(mut self, size: u32) -> Self {
        self.point_size = size;
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a non-positive or oversized
    /// coordinate limit or a zero point size, and [`Error::InvalidScale`] for
    /// a scale the normalizer rejects.
    pub fn build(self) -> Result<Self> {
        if self.coordinate_limit <= 0 || self.coordinate_limit > MAX_COORDINATE_LIMIT {
            return Err(Error::InvalidConfig(format!(
                "coordinate limit must be in 1..={MAX_COORDINATE_LIMIT}, got {}",
                self.coordinate_limit
            )));
        }
        if self.point_size == 0 {
            return Err(Error::InvalidConfig("point size must be at least 1".to_string()));
        }
        Normalizer::new(self.scale)?;
        Ok(self)
    }

    /// Absolute coordinate bound.
    #[must_use]
    pub const fn limit(&self) -> i32 {
        self.coordinate_limit
    }

    /// Normalization divisor.
    #[must_use]
    pub const fn normalization_scale(&self) -> f32 {
        self.scale
    }

    /// Preview point size in pixels.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.point_size
    }

    /// Normalizer for the configured scale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScale`] if the configuration was not built.
    pub fn normalizer(&self) -> Result<Normalizer> {
        Normalizer::new(self.scale)
    }
}
