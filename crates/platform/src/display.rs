//! Panel driver abstraction
//!
//! The operation set mirrors what Adafruit-GFX style TFT drivers expose, so
//! a board port is a thin shim over an existing driver. Coordinates are
//! signed and unchecked: out-of-range values are handed to the driver, which
//! clips.

use crate::color::Color16;
use tft_specs::{PanelSpec, Rotation};

/// Panel driver trait for RGB565 TFT panels
///
/// `width()`/`height()` report the drawing surface in the *current*
/// rotation, exactly as the session sees it.
pub trait PanelDriver {
    /// Error type for panel operations
    type Error: core::fmt::Debug;

    /// Run the controller init sequence for `spec` (reset, power-up,
    /// pixel format). Called once per session.
    fn init(&mut self, spec: &PanelSpec) -> Result<(), Self::Error>;

    /// Set the scan rotation; swaps `width()`/`height()` for 90°/270°.
    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Self::Error>;

    /// Drive the backlight GPIO `pin`
    fn set_backlight(&mut self, pin: u8, on: bool) -> Result<(), Self::Error>;

    /// Drawing width in the current rotation
    fn width(&self) -> u32;

    /// Drawing height in the current rotation
    fn height(&self) -> u32;

    /// Fill the whole panel with one color
    fn fill_screen(&mut self, color: Color16) -> Result<(), Self::Error>;

    /// Set a single pixel
    fn draw_pixel(&mut self, x: i32, y: i32, color: Color16) -> Result<(), Self::Error>;

    /// Vertical run of `len` pixels starting at (x, y)
    fn draw_fast_vline(&mut self, x: i32, y: i32, len: i32, color: Color16)
        -> Result<(), Self::Error>;

    /// Horizontal run of `len` pixels starting at (x, y)
    fn draw_fast_hline(&mut self, x: i32, y: i32, len: i32, color: Color16)
        -> Result<(), Self::Error>;

    /// Line of arbitrary slope between two endpoints (inclusive)
    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color16,
    ) -> Result<(), Self::Error>;

    /// Solid rectangle; negative extents grow up/left from (x, y)
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color16)
        -> Result<(), Self::Error>;

    /// One-pixel rectangle outline, extents as for [`PanelDriver::fill_rect`]
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color16)
        -> Result<(), Self::Error>;

    /// Solid circle centred on (x, y)
    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color16) -> Result<(), Self::Error>;

    /// One-pixel circle outline centred on (x, y)
    fn draw_circle(&mut self, x: i32, y: i32, r: i32, color: Color16) -> Result<(), Self::Error>;

    /// Move the text cursor (top-left of the next glyph)
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Text foreground color
    fn set_text_color(&mut self, color: Color16);

    /// Integer text magnification: each glyph pixel becomes a size×size block
    fn set_text_size(&mut self, size: u8);

    /// Whether glyphs that would cross the right edge move to the next line
    fn set_text_wrap(&mut self, wrap: bool);

    /// Render `text` at the cursor and advance it
    fn print(&mut self, text: &str) -> Result<(), Self::Error>;
}
