//! Point-list rendering into a framebuffer.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::rasterizer::Rasterizer;
use crate::shape::Shape;

/// Stamps normalized points as `point_size × point_size` squares.
///
/// Normalized `[-1, 1]` maps onto the full framebuffer with y pointing up.
/// Points outside that range are clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRenderer {
    point_size: u32,
    color: Rgba,
}

impl Default for PointRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PointRenderer {
    /// Create a renderer drawing 3 pixel white points.
    #[must_use]
    pub const fn new() -> Self {
        Self { point_size: 3, color: Rgba::WHITE }
    }

    /// Set the point size in pixels (minimum 1).
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.point_size = size.max(1);
        self
    }

    /// Set the point color.
    #[must_use]
    pub const fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Map a normalized coordinate to the pixel that contains it.
    ///
    /// Coordinates far outside `[-1, 1]` saturate at the `i64` bounds.
    #[must_use]
    pub fn to_pixel(fb: &Framebuffer, x: f32, y: f32) -> (i64, i64) {
        let w = (fb.width() - 1) as f32;
        let h = (fb.height() - 1) as f32;
        let px = ((x + 1.0) * 0.5 * w).round();
        let py = ((1.0 - y) * 0.5 * h).round();
        (px as i64, py as i64)
    }

    /// Draw one normalized point.
    pub fn draw_point(&self, fb: &mut Framebuffer, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let (px, py) = Self::to_pixel(fb, x, y);
        let half = i64::from((self.point_size - 1) / 2);
        fb.fill_rect(
            px.saturating_sub(half),
            py.saturating_sub(half),
            self.point_size,
            self.point_size,
            self.color,
        );
    }

    /// Draw an interleaved `x, y, z` buffer; `z` is ignored.
    pub fn draw_flat(&self, fb: &mut Framebuffer, flat: &[f32]) {
        for xyz in flat.chunks_exact(3) {
            self.draw_point(fb, xyz[0], xyz[1]);
        }
    }

    /// Draw a point triple list.
    pub fn draw_points(&self, fb: &mut Framebuffer, points: &[[f32; 3]]) {
        for &[x, y, _] in points {
            self.draw_point(fb, x, y);
        }
    }

    /// Rasterize, normalize and draw a shape in one step.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`Rasterizer::render`].
    pub fn draw_shape(
        &self,
        fb: &mut Framebuffer,
        rasterizer: &Rasterizer,
        shape: &Shape,
    ) -> Result<usize> {
        let flat = rasterizer.render(shape)?;
        self.draw_flat(fb, &flat);
        Ok(flat.len() / 3)
    }
}
