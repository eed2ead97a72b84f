//! TFT Display Emulator
//!
//! Headless desktop stand-in for the ST7735 and ILI9341 panels: an RGB565
//! framebuffer in the panel's native orientation behind the same
//! [`PanelDriver`] the board drivers implement, so primitive code runs
//! unchanged in tests and tools.
//!
//! # Example
//!
//! ```
//! use embedded_graphics::prelude::RgbColor;
//! use platform::PanelDriver;
//! use tft_emulator::Emulator;
//! use tft_specs::displays::IOT_BUS_ILI9341;
//!
//! let mut emulator = Emulator::with_spec(&IOT_BUS_ILI9341);
//! emulator.init(&IOT_BUS_ILI9341).unwrap();
//! emulator.set_rotation(IOT_BUS_ILI9341.rotation).unwrap();
//! assert_eq!((emulator.width(), emulator.height()), (320, 240));
//!
//! emulator.fill_rect(0, 0, 10, 10, platform::Color16::GREEN).unwrap();
//! assert_eq!(emulator.pixel(9, 9), Some(embedded_graphics::pixelcolor::Rgb565::GREEN));
//! ```

pub mod config;
mod framebuffer;

pub use config::EmulatorConfig;
pub use framebuffer::Framebuffer;

use std::path::Path;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use image::RgbImage;
use platform::{Color16, GraphicsPanel, PanelDriver};
use tft_specs::{PanelSpec, PanelVariant, Rotation};

/// Emulated panel
pub struct Emulator {
    panel: GraphicsPanel<Framebuffer>,
    spec: &'static PanelSpec,
    config: EmulatorConfig,
}

impl Emulator {
    /// Create emulator with specific panel specification
    pub fn with_spec(spec: &'static PanelSpec) -> Self {
        Self::with_spec_and_config(spec, EmulatorConfig::default())
    }

    /// Create emulator with specific panel specification and configuration
    pub fn with_spec_and_config(spec: &'static PanelSpec, config: EmulatorConfig) -> Self {
        Self {
            panel: GraphicsPanel::new(Framebuffer::new(spec.width, spec.height)),
            spec,
            config,
        }
    }

    /// Create emulator for a configured panel variant
    pub fn for_variant(variant: PanelVariant) -> Self {
        Self::with_spec(variant.spec())
    }

    /// Panel being emulated
    pub fn spec(&self) -> &'static PanelSpec {
        self.spec
    }

    /// Native-orientation framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        self.panel.target()
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.panel.rotation()
    }

    /// Last backlight command as `(pin, on)`
    pub fn backlight(&self) -> Option<(u8, bool)> {
        self.panel.backlight()
    }

    /// Pixel at logical (x, y) in the current rotation
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        let native = self.panel.to_native(x, y)?;
        let x = u32::try_from(native.x).ok()?;
        let y = u32::try_from(native.y).ok()?;
        self.framebuffer().get_pixel(x, y)
    }

    /// Render what a viewer sees: logical orientation, upscaled
    // `scale` is at least 1.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn to_image(&self) -> RgbImage {
        let scale = self.config.effective_scale();
        let width = self.panel.width().saturating_mul(scale);
        let height = self.panel.height().saturating_mul(scale);
        RgbImage::from_fn(width, height, |x, y| {
            let lx = i32::try_from(x / scale).unwrap_or(i32::MAX);
            let ly = i32::try_from(y / scale).unwrap_or(i32::MAX);
            framebuffer::rgb8(self.pixel(lx, ly).unwrap_or(Rgb565::BLACK))
        })
    }

    /// Save screenshot to PNG (for testing)
    pub fn screenshot(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        tracing::debug!(path = %path.display(), "emulator screenshot saved");
        Ok(())
    }
}

impl PanelDriver for Emulator {
    type Error = core::convert::Infallible;

    fn init(&mut self, spec: &PanelSpec) -> Result<(), Self::Error> {
        tracing::debug!(
            panel = spec.name,
            width = self.spec.width,
            height = self.spec.height,
            "Emulator display initialized"
        );
        self.panel.init(spec)
    }

    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Self::Error> {
        self.panel.set_rotation(rotation)
    }

    fn set_backlight(&mut self, pin: u8, on: bool) -> Result<(), Self::Error> {
        tracing::debug!(pin, on, "Emulator: backlight");
        self.panel.set_backlight(pin, on)
    }

    fn width(&self) -> u32 {
        self.panel.width()
    }

    fn height(&self) -> u32 {
        self.panel.height()
    }

    fn fill_screen(&mut self, color: Color16) -> Result<(), Self::Error> {
        self.panel.fill_screen(color)
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color16) -> Result<(), Self::Error> {
        self.panel.draw_pixel(x, y, color)
    }

    fn draw_fast_vline(&mut self, x: i32, y: i32, len: i32, color: Color16) -> Result<(), Self::Error> {
        self.panel.draw_fast_vline(x, y, len, color)
    }

    fn draw_fast_hline(&mut self, x: i32, y: i32, len: i32, color: Color16) -> Result<(), Self::Error> {
        self.panel.draw_fast_hline(x, y, len, color)
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        self.panel.draw_line(x0, y0, x1, y1, color)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color16) -> Result<(), Self::Error> {
        self.panel.fill_rect(x, y, w, h, color)
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color16) -> Result<(), Self::Error> {
        self.panel.draw_rect(x, y, w, h, color)
    }

    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color16) -> Result<(), Self::Error> {
        self.panel.fill_circle(x, y, r, color)
    }

    fn draw_circle(&mut self, x: i32, y: i32, r: i32, color: Color16) -> Result<(), Self::Error> {
        self.panel.draw_circle(x, y, r, color)
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.panel.set_cursor(x, y);
    }

    fn set_text_color(&mut self, color: Color16) {
        self.panel.set_text_color(color);
    }

    fn set_text_size(&mut self, size: u8) {
        self.panel.set_text_size(size);
    }

    fn set_text_wrap(&mut self, wrap: bool) {
        self.panel.set_text_wrap(wrap);
    }

    fn print(&mut self, text: &str) -> Result<(), Self::Error> {
        self.panel.print(text)
    }
}
