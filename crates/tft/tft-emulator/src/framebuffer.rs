//! CPU-side RGB565 framebuffer
//!
//! Stored in the panel's native orientation, cleared to black like a freshly
//! reset controller. Writes outside the buffer are dropped.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use image::{Rgb, RgbImage};

/// RGB565 pixel buffer
pub struct Framebuffer {
    pixels: Vec<Rgb565>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create new framebuffer filled with black
    pub fn new(width: u32, height: u32) -> Self {
        let len = usize::try_from(width.saturating_mul(height)).unwrap_or(0);
        Self {
            pixels: vec![Rgb565::BLACK; len],
            width,
            height,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixels, row-major
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.width)?.checked_add(x)?;
        usize::try_from(idx).ok()
    }

    /// Set pixel at coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) {
        if let Some(slot) = self.index(x, y).and_then(|i| self.pixels.get_mut(i)) {
            *slot = color;
        }
    }

    /// Get pixel at coordinates
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        self.index(x, y).and_then(|i| self.pixels.get(i)).copied()
    }

    /// Fill entire framebuffer with color
    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Number of pixels of exactly `color`
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Expand to 8-bit RGB, native orientation
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            rgb8(self.get_pixel(x, y).unwrap_or(Rgb565::BLACK))
        })
    }
}

/// RGB565 → 8-bit RGB with embedded-graphics' channel scaling
pub(crate) fn rgb8(color: Rgb565) -> Rgb<u8> {
    let c = Rgb888::from(color);
    Rgb([c.r(), c.g(), c.b()])
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_creation() {
        let fb = Framebuffer::new(100, 50);
        assert_eq!((fb.width(), fb.height()), (100, 50));
        assert_eq!(fb.pixels().len(), 5000);
        assert_eq!(fb.count(Rgb565::BLACK), 5000);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10);
        fb.set_pixel(5, 5, Rgb565::GREEN);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgb565::GREEN));
        assert_eq!(fb.get_pixel(0, 0), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_bounds_checking() {
        let mut fb = Framebuffer::new(10, 10);
        fb.set_pixel(100, 100, Rgb565::WHITE); // Should not panic
        assert_eq!(fb.get_pixel(100, 100), None);
        assert_eq!(fb.count(Rgb565::WHITE), 0);
    }

    #[test]
    fn test_draw_target_clips_negative_points() {
        let mut fb = Framebuffer::new(4, 4);
        fb.draw_iter([
            Pixel(Point::new(-1, 2), Rgb565::WHITE),
            Pixel(Point::new(2, -1), Rgb565::WHITE),
            Pixel(Point::new(1, 1), Rgb565::WHITE),
        ])
        .unwrap();
        assert_eq!(fb.count(Rgb565::WHITE), 1);
    }

    #[test]
    fn test_clear_fills_everything() {
        let mut fb = Framebuffer::new(3, 3);
        fb.clear(Rgb565::RED).unwrap();
        assert_eq!(fb.count(Rgb565::RED), 9);
    }

    #[test]
    fn test_rgb_image_expands_channels() {
        let mut fb = Framebuffer::new(2, 1);
        fb.set_pixel(0, 0, Rgb565::WHITE);
        fb.set_pixel(1, 0, Rgb565::GREEN);
        let img = fb.to_rgb_image();
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([0, 255, 0]));
    }
}
