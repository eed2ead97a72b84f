//! Typed primitive surface
//!
//! [`TftSurface`] has one method per VM primitive. Each method reduces its
//! color argument, asks the session for the driver and, if the display is
//! enabled, issues the driver calls. While disabled every drawing method
//! returns `Ok(())` without touching the driver.

use platform::PanelDriver;

use crate::color::{reduce_color, Color24};
use crate::config::SessionConfig;
use crate::geometry::{self, ShapeFill};
use crate::grid::{Cell, GridBitmask, GridLayout};
use crate::session::{Session, SessionState};

/// The VM-facing drawing API
pub struct TftSurface<D> {
    session: Session<D>,
}

impl<D: PanelDriver> TftSurface<D> {
    /// Surface over `driver`, disabled until [`TftSurface::enable_display`]
    pub fn new(driver: D, config: SessionConfig) -> Self {
        Self {
            session: Session::new(driver, &config),
        }
    }

    /// Surface over an existing session
    pub fn from_session(session: Session<D>) -> Self {
        Self { session }
    }

    /// `enableDisplay`
    pub fn enable_display(&mut self, on: bool) -> Result<(), D::Error> {
        self.session.enable(on)
    }

    /// `setPixel`
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color24) -> Result<(), D::Error> {
        match self.active("setPixel") {
            Some(driver) => driver.draw_pixel(x, y, reduce_color(color)),
            None => Ok(()),
        }
    }

    /// `line`; axis-aligned lines take the fast run path
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color24) -> Result<(), D::Error> {
        match self.active("line") {
            Some(driver) => geometry::draw_line(driver, x0, y0, x1, y1, reduce_color(color)),
            None => Ok(()),
        }
    }

    /// `rect`
    pub fn rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color24,
        filled: bool,
    ) -> Result<(), D::Error> {
        match self.active("rect") {
            Some(driver) => geometry::draw_rect(
                driver,
                x,
                y,
                width,
                height,
                reduce_color(color),
                ShapeFill::from(filled),
            ),
            None => Ok(()),
        }
    }

    /// `circle`
    pub fn circle(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        color: Color24,
        filled: bool,
    ) -> Result<(), D::Error> {
        match self.active("circle") {
            Some(driver) => {
                geometry::draw_circle(driver, x, y, radius, reduce_color(color), ShapeFill::from(filled))
            }
            None => Ok(()),
        }
    }

    /// `text`: print `text` with its top-left corner at (x, y)
    ///
    /// `scale` below 1 is treated as 1 and saturates at 255.
    pub fn text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color24,
        scale: i32,
        wrap: bool,
    ) -> Result<(), D::Error> {
        let Some(driver) = self.active("text") else {
            return Ok(());
        };
        let size = u8::try_from(scale.clamp(1, i32::from(u8::MAX))).unwrap_or(1);
        driver.set_cursor(x, y);
        driver.set_text_color(reduce_color(color));
        driver.set_text_size(size);
        driver.set_text_wrap(wrap);
        driver.print(text)
    }

    /// Light or clear one grid cell
    pub fn set_cell(&mut self, cell: Cell, on: bool) -> Result<(), D::Error> {
        let palette = self.session.palette();
        let Some(driver) = self.active("setCell") else {
            return Ok(());
        };
        GridLayout::for_panel(driver.width(), driver.height())
            .cell_fill(cell, on)
            .apply(driver, palette)
    }

    /// Show a whole grid; an empty mask clears the panel
    pub fn set_grid(&mut self, mask: GridBitmask) -> Result<(), D::Error> {
        let palette = self.session.palette();
        let Some(driver) = self.active("setGrid") else {
            return Ok(());
        };
        GridLayout::for_panel(driver.width(), driver.height())
            .plan(mask)
            .apply(driver, palette)
    }

    fn active(&mut self, primitive: &'static str) -> Option<&mut D> {
        let driver = self.session.active();
        if driver.is_none() {
            tracing::trace!(primitive, "display disabled, draw dropped");
        }
        driver
    }

    /// Session state
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Whether drawing is enabled
    pub fn is_enabled(&self) -> bool {
        self.session.is_enabled()
    }

    /// The session behind this surface
    pub fn session(&self) -> &Session<D> {
        &self.session
    }

    /// The driver, regardless of state
    pub fn driver(&self) -> &D {
        self.session.driver()
    }

    /// Release the driver
    pub fn into_driver(self) -> D {
        self.session.into_driver()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::{PanelCall, RecordingPanel};
    use platform::Color16;

    fn enabled() -> TftSurface<RecordingPanel> {
        let mut tft = TftSurface::new(RecordingPanel::new(128, 128), SessionConfig::default());
        tft.enable_display(true).unwrap();
        tft
    }

    fn drawn(tft: &TftSurface<RecordingPanel>) -> &[PanelCall] {
        // init, rotation, clear
        tft.driver().calls().get(3..).unwrap_or(&[])
    }

    #[test]
    fn test_set_pixel_reduces_color() {
        let mut tft = enabled();
        tft.set_pixel(4, 5, Color24(0xFF0000)).unwrap();
        assert_eq!(
            drawn(&tft),
            &[PanelCall::Pixel { x: 4, y: 5, color: Color16(0xF800) }]
        );
    }

    #[test]
    fn test_vertical_line_takes_fast_path() {
        let mut tft = enabled();
        tft.line(0, 0, 0, 50, Color24(0xFF0000)).unwrap();
        assert_eq!(
            drawn(&tft),
            &[PanelCall::VLine { x: 0, y: 0, len: 50, color: Color16(0xF800) }]
        );
    }

    #[test]
    fn test_rect_and_circle() {
        let mut tft = enabled();
        tft.rect(10, 10, 20, 20, Color24(0x0000FF), true).unwrap();
        tft.circle(64, 64, 10, Color24(0xFFFFFF), false).unwrap();
        assert_eq!(
            drawn(&tft),
            &[
                PanelCall::FillRect { x: 10, y: 10, w: 20, h: 20, color: Color16(0x001F) },
                PanelCall::DrawCircle { x: 64, y: 64, r: 10, color: Color16::WHITE },
            ]
        );
    }

    #[test]
    fn test_text_sets_style_then_prints() {
        let mut tft = enabled();
        tft.text("Hi", 1, 2, Color24(0xFFFFFF), 2, true).unwrap();
        assert_eq!(
            drawn(&tft),
            &[
                PanelCall::SetCursor { x: 1, y: 2 },
                PanelCall::TextColor(Color16::WHITE),
                PanelCall::TextSize(2),
                PanelCall::TextWrap(true),
                PanelCall::Print("Hi".try_into().unwrap()),
            ]
        );
    }

    #[test]
    fn test_text_scale_is_clamped() {
        let mut tft = enabled();
        tft.text("", 0, 0, Color24::WHITE, 0, false).unwrap();
        tft.text("", 0, 0, Color24::WHITE, 1000, false).unwrap();
        let sizes: Vec<u8> = drawn(&tft)
            .iter()
            .filter_map(|c| match c {
                PanelCall::TextSize(s) => Some(*s),
                _ => None,
            })
            .collect();
        assert_eq!(sizes, vec![1, 255]);
    }

    #[test]
    fn test_disabled_surface_issues_no_calls() {
        let mut tft = TftSurface::new(RecordingPanel::new(128, 128), SessionConfig::default());
        tft.set_pixel(1, 1, Color24::WHITE).unwrap();
        tft.line(0, 0, 10, 10, Color24::WHITE).unwrap();
        tft.rect(0, 0, 5, 5, Color24::WHITE, true).unwrap();
        tft.circle(5, 5, 2, Color24::WHITE, true).unwrap();
        tft.text("x", 0, 0, Color24::WHITE, 1, true).unwrap();
        tft.set_cell(Cell::new(1, 1).unwrap(), true).unwrap();
        tft.set_grid(GridBitmask::FULL).unwrap();
        assert!(tft.driver().calls().is_empty());
    }

    #[test]
    fn test_set_cell_uses_current_dimensions() {
        let mut tft = enabled();
        tft.set_cell(Cell::new(5, 5).unwrap(), true).unwrap();
        assert_eq!(
            drawn(&tft),
            &[PanelCall::FillRect { x: 103, y: 103, w: 22, h: 22, color: Color16::GREEN }]
        );
    }

    #[test]
    fn test_set_grid_zero_clears() {
        let mut tft = enabled();
        tft.set_grid(GridBitmask(0)).unwrap();
        assert_eq!(drawn(&tft), &[PanelCall::FillScreen(Color16::BLACK)]);
    }
}
