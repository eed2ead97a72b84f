//! `PanelDriver` over embedded-graphics
//!
//! [`GraphicsPanel`] turns any `DrawTarget<Color = Rgb565>` into a
//! [`PanelDriver`]: a real SPI display driver on the board, or the
//! framebuffer of the desktop emulator.
//!
//! # Rotation
//!
//! The wrapped target is addressed in its native orientation. The panel
//! keeps a rotation and maps every logical pixel onto the native grid, so
//! after `set_rotation(Degrees90)` a 240×320 target draws as 320×240.
//! Logical pixels outside the rotated bounds are dropped before mapping.
//!
//! # Clipping
//!
//! Arguments are arbitrary `i32`s. Every shape is clipped to the logical
//! surface in 64-bit arithmetic before anything is rasterized, so the work
//! done is bounded by the visible pixels and no coordinate overflows.
//!
//! # Text
//!
//! Text uses the 6×10 mono font with Adafruit-GFX cursor semantics: the
//! cursor is the top-left corner of the next glyph, `\n` starts a new line
//! at x = 0 and, with wrapping on, a glyph that would cross the right edge
//! moves to the next line first. A text size of `s` draws every glyph pixel
//! as an `s`×`s` block.

// Clipping runs in i64 (i128 for line parameters), where sums and products
// of i32 inputs cannot overflow. Values narrowed back to i32/u32 have been
// clipped to the panel first.
#![allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::color::Color16;
use crate::display::PanelDriver;
use tft_specs::{PanelSpec, Rotation};

const FONT: &MonoFont<'static> = &FONT_6X10;

/// [`PanelDriver`] implementation over an embedded-graphics draw target
pub struct GraphicsPanel<T> {
    target: T,
    rotation: Rotation,
    cursor: Point,
    text_color: Color16,
    text_size: u8,
    wrap: bool,
    backlight: Option<(u8, bool)>,
}

impl<T> GraphicsPanel<T>
where
    T: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    /// Wrap `target`, initially unrotated
    pub fn new(target: T) -> Self {
        Self {
            target,
            rotation: Rotation::Degrees0,
            cursor: Point::zero(),
            text_color: Color16::WHITE,
            text_size: 1,
            wrap: true,
            backlight: None,
        }
    }

    /// Borrow the wrapped target
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutably borrow the wrapped target
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Unwrap the target
    pub fn into_inner(self) -> T {
        self.target
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Current text cursor
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Last backlight command as `(pin, on)`
    pub fn backlight(&self) -> Option<(u8, bool)> {
        self.backlight
    }

    fn logical_size(&self) -> Size {
        let native = self.target.size();
        let (w, h) = self.rotation.apply_to_dimensions(native.width, native.height);
        Size::new(w, h)
    }

    /// Native target position of logical pixel (x, y), `None` off-panel
    pub fn to_native(&self, x: i32, y: i32) -> Option<Point> {
        self.mapping().to_native(Point::new(x, y))
    }

    fn mapping(&self) -> Mapping {
        Mapping {
            rotation: self.rotation,
            size: self.logical_size(),
            native: self.target.size(),
        }
    }

    fn rotated(&mut self) -> Rotated<'_, T> {
        let mapping = self.mapping();
        Rotated {
            target: &mut self.target,
            mapping,
        }
    }

    /// Fill origin + extent after clipping it to the surface
    fn fill_clipped(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgb565) -> Result<(), T::Error> {
        match clip(x, y, w, h, self.logical_size()) {
            Some(area) => self.rotated().fill_solid(&area, color),
            None => Ok(()),
        }
    }

    /// Filled disc, or with `ring` the one-pixel ring just inside its edge,
    /// drawn one visible scanline at a time
    fn circle_rows(&mut self, x: i32, y: i32, r: i32, color: Rgb565, ring: bool) -> Result<(), T::Error> {
        if r < 0 {
            return Ok(());
        }
        let (cx, cy, r) = (i64::from(x), i64::from(y), i64::from(r));
        let top = (cy - r).max(0);
        let bottom = (cy + r).min(i64::from(self.logical_size().height) - 1);
        for row in top..=bottom {
            let dy = row - cy;
            let Some(outer) = half_width(r, dy) else {
                continue;
            };
            let inner = if ring { half_width(r - 1, dy) } else { None };
            match inner {
                Some(inner) => {
                    let run = outer - inner;
                    self.fill_clipped(cx - outer, row, run, 1, color)?;
                    self.fill_clipped(cx + inner + 1, row, run, 1, color)?;
                }
                None => self.fill_clipped(cx - outer, row, 2 * outer + 1, 1, color)?,
            }
        }
        Ok(())
    }
}

impl<T> PanelDriver for GraphicsPanel<T>
where
    T: DrawTarget<Color = Rgb565> + OriginDimensions,
    T::Error: core::fmt::Debug,
{
    type Error = T::Error;

    fn init(&mut self, spec: &PanelSpec) -> Result<(), Self::Error> {
        tracing::debug!(
            panel = spec.name,
            controller = spec.controller.name(),
            "graphics panel init"
        );
        self.rotation = Rotation::Degrees0;
        self.cursor = Point::zero();
        self.text_color = Color16::WHITE;
        self.text_size = 1;
        self.wrap = true;
        Ok(())
    }

    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Self::Error> {
        self.rotation = rotation;
        Ok(())
    }

    fn set_backlight(&mut self, pin: u8, on: bool) -> Result<(), Self::Error> {
        self.backlight = Some((pin, on));
        Ok(())
    }

    fn width(&self) -> u32 {
        self.logical_size().width
    }

    fn height(&self) -> u32 {
        self.logical_size().height
    }

    fn fill_screen(&mut self, color: Color16) -> Result<(), Self::Error> {
        self.target.clear(color.into())
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color16) -> Result<(), Self::Error> {
        self.rotated()
            .draw_iter(core::iter::once(Pixel(Point::new(x, y), color.into())))
    }

    fn draw_fast_vline(
        &mut self,
        x: i32,
        y: i32,
        len: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        // Negative lengths extend upwards from the anchor.
        self.fill_clipped(x.into(), y.into(), 1, len.into(), color.into())
    }

    fn draw_fast_hline(
        &mut self,
        x: i32,
        y: i32,
        len: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        self.fill_clipped(x.into(), y.into(), len.into(), 1, color.into())
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        let visible = clip_line(Point::new(x0, y0), Point::new(x1, y1), self.logical_size());
        let Some((start, end)) = visible else {
            return Ok(());
        };
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
            .draw(&mut self.rotated())
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        self.fill_clipped(x.into(), y.into(), w.into(), h.into(), color.into())
    }

    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color16,
    ) -> Result<(), Self::Error> {
        let (x, w) = normalize(x.into(), w.into());
        let (y, h) = normalize(y.into(), h.into());
        if w == 0 || h == 0 {
            return Ok(());
        }
        let color = color.into();
        self.fill_clipped(x, y, w, 1, color)?;
        if h > 1 {
            self.fill_clipped(x, y + h - 1, w, 1, color)?;
        }
        if h > 2 {
            self.fill_clipped(x, y + 1, 1, h - 2, color)?;
            if w > 1 {
                self.fill_clipped(x + w - 1, y + 1, 1, h - 2, color)?;
            }
        }
        Ok(())
    }

    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color16) -> Result<(), Self::Error> {
        self.circle_rows(x, y, r, color.into(), false)
    }

    fn draw_circle(&mut self, x: i32, y: i32, r: i32, color: Color16) -> Result<(), Self::Error> {
        self.circle_rows(x, y, r, color.into(), true)
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn set_text_color(&mut self, color: Color16) {
        self.text_color = color;
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size.max(1);
    }

    fn set_text_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    fn print(&mut self, text: &str) -> Result<(), Self::Error> {
        let scale = i32::from(self.text_size.max(1));
        let style = MonoTextStyle::new(FONT, self.text_color.into());
        let glyph_width = FONT.character_size.width as i32 * scale;
        let advance = (FONT.character_size.width + FONT.character_spacing) as i32 * scale;
        let line_height = FONT.character_size.height as i32 * scale;
        let size = self.logical_size();
        let (width, height) = (size.width as i32, size.height as i32);

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            match ch {
                '\n' => {
                    self.cursor = Point::new(0, self.cursor.y.saturating_add(line_height));
                    continue;
                }
                '\r' => continue,
                _ => {}
            }
            if self.wrap && self.cursor.x.saturating_add(advance) > width {
                self.cursor = Point::new(0, self.cursor.y.saturating_add(line_height));
            }
            let origin = self.cursor;
            let on_panel = origin.x < width
                && origin.y < height
                && origin.x.saturating_add(glyph_width) > 0
                && origin.y.saturating_add(line_height) > 0;
            if on_panel {
                let glyph: &str = ch.encode_utf8(&mut buf);
                let mut target = Magnified {
                    target: self.rotated(),
                    origin,
                    scale,
                };
                Text::with_baseline(glyph, Point::zero(), style, Baseline::Top).draw(&mut target)?;
            }
            self.cursor.x = self.cursor.x.saturating_add(advance);
        }
        Ok(())
    }
}

/// Origin + extent along one axis with a negative extent growing
/// up/left from the origin, as `(start, len)` with `len >= 0`
fn normalize(origin: i64, len: i64) -> (i64, i64) {
    if len < 0 {
        (origin + len + 1, -len)
    } else {
        (origin, len)
    }
}

/// Part of an origin + extent rectangle lying on a `bounds`-sized surface
fn clip(x: i64, y: i64, w: i64, h: i64, bounds: Size) -> Option<Rectangle> {
    let (x0, x1) = clip_span(x, w, bounds.width)?;
    let (y0, y1) = clip_span(y, h, bounds.height)?;
    Some(Rectangle::new(
        Point::new(x0 as i32, y0 as i32),
        Size::new((x1 - x0) as u32, (y1 - y0) as u32),
    ))
}

/// Half-open `[start, end)` of one axis clipped to `[0, limit)`
fn clip_span(origin: i64, len: i64, limit: u32) -> Option<(i64, i64)> {
    let (start, len) = normalize(origin, len);
    let end = (start + len).min(i64::from(limit));
    let start = start.max(0);
    (start < end).then_some((start, end))
}

/// Widest |dx| inside a radius-`r` circle on the row `dy` from its centre
///
/// Same inside test as embedded-graphics' `Circle` of diameter 2r + 1:
/// `4(dx² + dy²) < threshold`, with small circles trimmed slightly.
fn half_width(r: i64, dy: i64) -> Option<i64> {
    if r < 0 {
        return None;
    }
    // r and |dy| are at most i32::MAX, so d² and 4dy² fit in u64.
    let d = (2 * r + 1) as u64;
    let threshold = if d <= 4 { d * d - d / 2 } else { d * d };
    let dy = dy.unsigned_abs();
    let room = threshold.checked_sub(4 * dy * dy)?;
    if room == 0 {
        return None;
    }
    Some(((room - 1) / 4).isqrt() as i64)
}

/// Clip the segment p0→p1 to a `bounds`-sized surface (Liang–Barsky in
/// exact fractions). Segments already on the surface come back unchanged.
fn clip_line(p0: Point, p1: Point, bounds: Size) -> Option<(Point, Point)> {
    let (w, h) = (i64::from(bounds.width), i64::from(bounds.height));
    let inside = |p: Point| {
        let (x, y) = (i64::from(p.x), i64::from(p.y));
        x >= 0 && y >= 0 && x < w && y < h
    };
    if inside(p0) && inside(p1) {
        return Some((p0, p1));
    }

    let (x0, y0) = (i128::from(p0.x), i128::from(p0.y));
    let (dx, dy) = (i128::from(p1.x) - x0, i128::from(p1.y) - y0);
    let (x_max, y_max) = (i128::from(w) - 1, i128::from(h) - 1);

    // Entry/exit parameters as (numerator, positive denominator)
    let mut enter = (0i128, 1i128);
    let mut exit = (1i128, 1i128);
    for (p, q) in [(-dx, x0), (dx, x_max - x0), (-dy, y0), (dy, y_max - y0)] {
        if p == 0 {
            if q < 0 {
                return None;
            }
            continue;
        }
        if p < 0 {
            let t = (-q, -p);
            if t.0 * enter.1 > enter.0 * t.1 {
                enter = t;
            }
        } else {
            let t = (q, p);
            if t.0 * exit.1 < exit.0 * t.1 {
                exit = t;
            }
        }
    }
    if enter.0 * exit.1 > exit.0 * enter.1 {
        return None;
    }

    let at = |(n, d): (i128, i128)| -> Option<Point> {
        let x = i32::try_from(x0 + dx * n / d).ok()?;
        let y = i32::try_from(y0 + dy * n / d).ok()?;
        Some(Point::new(x, y))
    };
    Some((at(enter)?, at(exit)?))
}

/// Logical → native coordinate mapping for one rotation
#[derive(Clone, Copy)]
struct Mapping {
    rotation: Rotation,
    size: Size,
    native: Size,
}

impl Mapping {
    /// Map a logical point to native coordinates, or `None` if it lies
    /// outside the logical surface.
    fn to_native(self, p: Point) -> Option<Point> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        if p.x < 0 || p.y < 0 || p.x >= w || p.y >= h {
            return None;
        }
        let (nw, nh) = (self.native.width as i32, self.native.height as i32);
        Some(match self.rotation {
            Rotation::Degrees0 => p,
            Rotation::Degrees90 => Point::new(nw - 1 - p.y, p.x),
            Rotation::Degrees180 => Point::new(nw - 1 - p.x, nh - 1 - p.y),
            Rotation::Degrees270 => Point::new(p.y, nh - 1 - p.x),
        })
    }

    /// Native rectangle covering the on-surface part of a logical area
    fn to_native_area(self, area: &Rectangle) -> Option<Rectangle> {
        let area = clip(
            area.top_left.x.into(),
            area.top_left.y.into(),
            area.size.width.into(),
            area.size.height.into(),
            self.size,
        )?;
        let a = self.to_native(area.top_left)?;
        let b = self.to_native(area.bottom_right()?)?;
        Some(Rectangle::new(
            Point::new(a.x.min(b.x), a.y.min(b.y)),
            Size::new(a.x.abs_diff(b.x) + 1, a.y.abs_diff(b.y) + 1),
        ))
    }
}

/// Logical-coordinate view of a native-orientation target
struct Rotated<'a, T> {
    target: &'a mut T,
    mapping: Mapping,
}

impl<T> OriginDimensions for Rotated<'_, T> {
    fn size(&self) -> Size {
        self.mapping.size
    }
}

impl<T> DrawTarget for Rotated<'_, T>
where
    T: DrawTarget<Color = Rgb565>,
{
    type Color = Rgb565;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let mapping = self.mapping;
        self.target.draw_iter(
            pixels
                .into_iter()
                .filter_map(move |Pixel(p, c)| mapping.to_native(p).map(|n| Pixel(n, c))),
        )
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        match self.mapping.to_native_area(area) {
            Some(native) => self.target.fill_solid(&native, color),
            None => Ok(()),
        }
    }
}

/// Draws every pixel as a `scale`×`scale` block offset by `origin`
struct Magnified<'a, T> {
    target: Rotated<'a, T>,
    origin: Point,
    scale: i32,
}

impl<T> OriginDimensions for Magnified<'_, T> {
    fn size(&self) -> Size {
        self.target.size()
    }
}

impl<T> DrawTarget for Magnified<'_, T>
where
    T: DrawTarget<Color = Rgb565>,
{
    type Color = Rgb565;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new_equal(self.scale as u32);
        for Pixel(p, color) in pixels {
            let top_left = self.origin + p * self.scale;
            self.target.fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}
