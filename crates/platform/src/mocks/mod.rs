//! Mock implementations for testing
//!
//! - [`RecordingPanel`]: a [`PanelDriver`] that draws nothing and records
//!   every call, for asserting *which* driver path a primitive took.
//! - [`Canvas`]: a plain RGB565 `DrawTarget`, for asserting *what* ended up
//!   on the pixels when wrapped in a [`crate::GraphicsPanel`].

#![cfg(any(test, feature = "std"))]

use crate::*;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

/// Maximum number of calls a [`RecordingPanel`] keeps
pub const CALL_CAPACITY: usize = 256;

/// One recorded driver call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCall {
    /// `init` for the given controller
    Init(Controller),
    /// `set_rotation`
    SetRotation(Rotation),
    /// `set_backlight`
    SetBacklight {
        /// GPIO
        pin: u8,
        /// Level
        on: bool,
    },
    /// `fill_screen`
    FillScreen(Color16),
    /// `draw_pixel`
    Pixel {
        /// x
        x: i32,
        /// y
        y: i32,
        /// color
        color: Color16,
    },
    /// `draw_fast_vline`
    VLine {
        /// Anchor x
        x: i32,
        /// Anchor y
        y: i32,
        /// Run length
        len: i32,
        /// color
        color: Color16,
    },
    /// `draw_fast_hline`
    HLine {
        /// Anchor x
        x: i32,
        /// Anchor y
        y: i32,
        /// Run length
        len: i32,
        /// color
        color: Color16,
    },
    /// `draw_line`
    Line {
        /// Start x
        x0: i32,
        /// Start y
        y0: i32,
        /// End x
        x1: i32,
        /// End y
        y1: i32,
        /// color
        color: Color16,
    },
    /// `fill_rect`
    FillRect {
        /// x
        x: i32,
        /// y
        y: i32,
        /// Width
        w: i32,
        /// Height
        h: i32,
        /// color
        color: Color16,
    },
    /// `draw_rect`
    DrawRect {
        /// x
        x: i32,
        /// y
        y: i32,
        /// Width
        w: i32,
        /// Height
        h: i32,
        /// color
        color: Color16,
    },
    /// `fill_circle`
    FillCircle {
        /// Centre x
        x: i32,
        /// Centre y
        y: i32,
        /// Radius
        r: i32,
        /// color
        color: Color16,
    },
    /// `draw_circle`
    DrawCircle {
        /// Centre x
        x: i32,
        /// Centre y
        y: i32,
        /// Radius
        r: i32,
        /// color
        color: Color16,
    },
    /// `set_cursor`
    SetCursor {
        /// x
        x: i32,
        /// y
        y: i32,
    },
    /// `set_text_color`
    TextColor(Color16),
    /// `set_text_size`
    TextSize(u8),
    /// `set_text_wrap`
    TextWrap(bool),
    /// `print`, text truncated to 32 bytes
    Print(heapless::String<32>),
}

/// Recording panel driver
///
/// Starts with the given native dimensions; `set_rotation` swaps them for
/// 90°/270° like a real controller.
pub struct RecordingPanel {
    native: (u32, u32),
    rotation: Rotation,
    init_count: usize,
    calls: heapless::Vec<PanelCall, CALL_CAPACITY>,
}

impl RecordingPanel {
    /// Create new recording panel
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            native: (width, height),
            rotation: Rotation::Degrees0,
            init_count: 0,
            calls: heapless::Vec::new(),
        }
    }

    /// Recording panel with the native geometry of `spec`
    pub fn for_spec(spec: &PanelSpec) -> Self {
        Self::new(spec.width, spec.height)
    }

    /// Number of `init` calls so far
    pub fn init_count(&self) -> usize {
        self.init_count
    }

    /// Recorded calls, oldest first
    pub fn calls(&self) -> &[PanelCall] {
        &self.calls
    }

    /// Most recent call
    pub fn last_call(&self) -> Option<&PanelCall> {
        self.calls.last()
    }

    /// Forget recorded calls (the init counter is kept)
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn record(&mut self, call: PanelCall) {
        // Past capacity the oldest calls are what tests care about.
        let _ = self.calls.push(call);
    }
}

impl PanelDriver for RecordingPanel {
    type Error = core::convert::Infallible;

    fn init(&mut self, spec: &PanelSpec) -> Result<(), Self::Error> {
        self.init_count = self.init_count.saturating_add(1);
        self.rotation = Rotation::Degrees0;
        self.record(PanelCall::Init(spec.controller));
        Ok(())
    }

    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Self::Error> {
        self.rotation = rotation;
        self.record(PanelCall::SetRotation(rotation));
        Ok(())
    }

    fn set_backlight(&mut self, pin: u8, on: bool) -> Result<(), Self::Error> {
        self.record(PanelCall::SetBacklight { pin, on });
        Ok(())
    }

    fn width(&self) -> u32 {
        self.rotation.apply_to_dimensions(self.native.0, self.native.1).0
    }

    fn height(&self) -> u32 {
        self.rotation.apply_to_dimensions(self.native.0, self.native.1).1
    }

    fn fill_screen(&mut self, color: Color16) -> Result<(), Self::Error> {
        self.record(PanelCall::FillScreen(color));
        Ok(())
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color16) -> Result<(), Self::Error> {
        self.record(PanelCall::Pixel { x, y, color });
        Ok(())
    }

    fn draw_fast_vline(
        &mut self,
        x: i32,
        y: i32,
        len: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        self.record(PanelCall::VLine { x, y, len, color });
        Ok(())
    }

    fn draw_fast_hline(
        &mut self,
        x: i32,
        y: i32,
        len: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        self.record(PanelCall::HLine { x, y, len, color });
        Ok(())
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        self.record(PanelCall::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        self.record(PanelCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        self.record(PanelCall::DrawRect { x, y, w, h, color });
        Ok(())
    }

    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color16) -> Result<(), Self::Error> {
        self.record(PanelCall::FillCircle { x, y, r, color });
        Ok(())
    }

    fn draw_circle(&mut self, x: i32, y: i32, r: i32, color: Color16) -> Result<(), Self::Error> {
        self.record(PanelCall::DrawCircle { x, y, r, color });
        Ok(())
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.record(PanelCall::SetCursor { x, y });
    }

    fn set_text_color(&mut self, color: Color16) {
        self.record(PanelCall::TextColor(color));
    }

    fn set_text_size(&mut self, size: u8) {
        self.record(PanelCall::TextSize(size));
    }

    fn set_text_wrap(&mut self, wrap: bool) {
        self.record(PanelCall::TextWrap(wrap));
    }

    fn print(&mut self, text: &str) -> Result<(), Self::Error> {
        let mut s = heapless::String::new();
        for ch in text.chars() {
            if s.push(ch).is_err() {
                break;
            }
        }
        self.record(PanelCall::Print(s));
        Ok(())
    }
}

/// Plain RGB565 pixel buffer, cleared to black
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl Canvas {
    /// Create new canvas
    pub fn new(width: u32, height: u32) -> Self {
        let len = usize::try_from(width.saturating_mul(height)).unwrap_or(0);
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; len],
        }
    }

    /// Pixel at (x, y), `None` outside the canvas
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = usize::try_from(y.checked_mul(self.width)?.checked_add(x)?).ok()?;
        self.pixels.get(idx).copied()
    }

    /// Number of pixels of exactly `color`
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Raw pixels, row-major
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x >= self.width || y >= self.height {
                continue;
            }
            let idx = y
                .checked_mul(self.width)
                .and_then(|row| row.checked_add(x))
                .and_then(|i| usize::try_from(i).ok());
            if let Some(slot) = idx.and_then(|i| self.pixels.get_mut(i)) {
                *slot = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
