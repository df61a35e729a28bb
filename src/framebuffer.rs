//! RGBA pixel buffer that rasterized point sets are stamped into.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Row-major RGBA framebuffer, 4 bytes per pixel, no row padding.
///
/// Row 0 is the top of the image, as PNG expects.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a transparent framebuffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use lattice_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(200, 200).unwrap();
    /// assert_eq!(fb.pixel_count(), 40_000);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let pixels = vec![0; (width as usize) * (height as usize) * 4];
        Ok(Self { width, height, pixels })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw tightly packed RGBA bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill every pixel with one color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill a rectangular region, clipped to the buffer.
    ///
    /// Signed origin so squares centred near the border are clipped rather
    /// than dropped. Any `i64` origin is accepted.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgba) {
        let x1 = x.clamp(0, i64::from(self.width));
        let y1 = y.clamp(0, i64::from(self.height));
        let x2 = x.saturating_add(i64::from(w)).clamp(0, i64::from(self.width));
        let y2 = y.saturating_add(i64::from(h)).clamp(0, i64::from(self.height));
        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        for row in y1..y2 {
            let start = self.pixel_index(x1 as u32, row as u32);
            let end = start + ((x2 - x1) as usize) * 4;
            for chunk in self.pixels[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a pixel, `None` out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.pixel_index(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba::from_array(rgba))
    }

    /// Set the color at a pixel. Does nothing out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Number of pixels currently holding `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels.chunks_exact(4).filter(|chunk| *chunk == rgba).count()
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixels().len(), 100 * 50 * 4);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(7, 3).unwrap();
        fb.clear(Rgba::RED);
        assert_eq!(fb.count_pixels(Rgba::RED), 21);
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(-1, -1, 3, 3, Rgba::BLUE);
        assert_eq!(fb.count_pixels(Rgba::BLUE), 4);
        fb.fill_rect(9, 9, 3, 3, Rgba::GREEN);
        assert_eq!(fb.count_pixels(Rgba::GREEN), 1);
        fb.fill_rect(20, 20, 3, 3, Rgba::RED);
        assert_eq!(fb.count_pixels(Rgba::RED), 0);
    }

    #[test]
    fn test_fill_rect_extreme_origin() {
        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.fill_rect(i64::MAX, 0, u32::MAX, 3, Rgba::RED);
        fb.fill_rect(0, i64::MAX - 1, 3, u32::MAX, Rgba::RED);
        fb.fill_rect(i64::MIN, i64::MIN, u32::MAX, u32::MAX, Rgba::RED);
        assert_eq!(fb.count_pixels(Rgba::RED), 0);
        fb.fill_rect(-2, 6, u32::MAX, u32::MAX, Rgba::RED);
        assert_eq!(fb.count_pixels(Rgba::RED), 16);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));
        fb.set_pixel(50, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(100, 100), None);
        assert_eq!(fb.count_pixels(Rgba::BLUE), 1);
    }
}
