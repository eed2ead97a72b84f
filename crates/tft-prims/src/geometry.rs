//! Geometry dispatch
//!
//! Picks the cheapest driver call for a shape. Axis-aligned lines become
//! single row/column runs, which panel drivers write as one address window
//! instead of walking a Bresenham line; filled and outline shapes map to
//! their dedicated driver calls.
//!
//! # Fast runs
//!
//! A run is anchored at the *first* endpoint with length `|delta|`. The
//! endpoints are not reordered, so `line(5, 10, 5, 4)` becomes a 6-pixel
//! run starting at y = 10, and a zero-length line (both endpoints equal)
//! becomes a zero-length run.

use platform::{Color16, PanelDriver};

/// Which driver path a line takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineRoute {
    /// `x0 == x1`: vertical run
    Vertical {
        /// Anchor x
        x: i32,
        /// Anchor y
        y: i32,
        /// Run length, `|y1 - y0|`
        len: i32,
    },
    /// `y0 == y1` (and `x0 != x1`): horizontal run
    Horizontal {
        /// Anchor x
        x: i32,
        /// Anchor y
        y: i32,
        /// Run length, `|x1 - x0|`
        len: i32,
    },
    /// Anything else: general line
    General {
        /// Start x
        x0: i32,
        /// Start y
        y0: i32,
        /// End x
        x1: i32,
        /// End y
        y1: i32,
    },
}

/// Decide how a line from (x0, y0) to (x1, y1) is drawn
pub fn route_line(x0: i32, y0: i32, x1: i32, y1: i32) -> LineRoute {
    if x0 == x1 {
        LineRoute::Vertical {
            x: x0,
            y: y0,
            len: abs_delta(y0, y1),
        }
    } else if y0 == y1 {
        LineRoute::Horizontal {
            x: x0,
            y: y0,
            len: abs_delta(x0, x1),
        }
    } else {
        LineRoute::General { x0, y0, x1, y1 }
    }
}

/// `|b - a|`, saturating at `i32::MAX` for endpoints on opposite extremes
fn abs_delta(a: i32, b: i32) -> i32 {
    i32::try_from(b.abs_diff(a)).unwrap_or(i32::MAX)
}

/// Draw a line through the cheapest driver path
pub fn draw_line<D: PanelDriver>(
    driver: &mut D,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color16,
) -> Result<(), D::Error> {
    match route_line(x0, y0, x1, y1) {
        LineRoute::Vertical { x, y, len } => driver.draw_fast_vline(x, y, len, color),
        LineRoute::Horizontal { x, y, len } => driver.draw_fast_hline(x, y, len, color),
        LineRoute::General { x0, y0, x1, y1 } => driver.draw_line(x0, y0, x1, y1, color),
    }
}

/// Whether a closed shape is painted solid or as a one-pixel outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShapeFill {
    /// Solid
    Filled,
    /// Outline only
    Outline,
}

impl From<bool> for ShapeFill {
    fn from(filled: bool) -> Self {
        if filled {
            Self::Filled
        } else {
            Self::Outline
        }
    }
}

/// Draw a rectangle with its top-left corner at (x, y)
pub fn draw_rect<D: PanelDriver>(
    driver: &mut D,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color16,
    fill: ShapeFill,
) -> Result<(), D::Error> {
    match fill {
        ShapeFill::Filled => driver.fill_rect(x, y, width, height, color),
        ShapeFill::Outline => driver.draw_rect(x, y, width, height, color),
    }
}

/// Draw a circle centred on (x, y)
pub fn draw_circle<D: PanelDriver>(
    driver: &mut D,
    x: i32,
    y: i32,
    radius: i32,
    color: Color16,
    fill: ShapeFill,
) -> Result<(), D::Error> {
    match fill {
        ShapeFill::Filled => driver.fill_circle(x, y, radius, color),
        ShapeFill::Outline => driver.draw_circle(x, y, radius, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::{PanelCall, RecordingPanel};

    const C: Color16 = Color16(0x1234);

    #[test]
    fn test_route_vertical() {
        assert_eq!(
            route_line(4, 2, 4, 9),
            LineRoute::Vertical { x: 4, y: 2, len: 7 }
        );
    }

    #[test]
    fn test_route_horizontal() {
        assert_eq!(
            route_line(1, 6, 11, 6),
            LineRoute::Horizontal { x: 1, y: 6, len: 10 }
        );
    }

    #[test]
    fn test_route_general() {
        assert_eq!(
            route_line(0, 0, 3, 4),
            LineRoute::General { x0: 0, y0: 0, x1: 3, y1: 4 }
        );
    }

    #[test]
    fn test_descending_run_keeps_first_point_as_anchor() {
        assert_eq!(
            route_line(5, 10, 5, 4),
            LineRoute::Vertical { x: 5, y: 10, len: 6 }
        );
        assert_eq!(
            route_line(9, 3, 2, 3),
            LineRoute::Horizontal { x: 9, y: 3, len: 7 }
        );
    }

    #[test]
    fn test_single_point_is_zero_length_vertical_run() {
        assert_eq!(
            route_line(7, 7, 7, 7),
            LineRoute::Vertical { x: 7, y: 7, len: 0 }
        );
    }

    #[test]
    fn test_extreme_delta_saturates() {
        assert_eq!(
            route_line(0, i32::MIN, 0, i32::MAX),
            LineRoute::Vertical { x: 0, y: i32::MIN, len: i32::MAX }
        );
    }

    #[test]
    fn test_draw_line_uses_routed_driver_call() {
        let mut panel = RecordingPanel::new(64, 64);
        draw_line(&mut panel, 3, 1, 3, 8, C).unwrap();
        draw_line(&mut panel, 1, 3, 8, 3, C).unwrap();
        draw_line(&mut panel, 1, 1, 8, 8, C).unwrap();
        assert_eq!(
            panel.calls(),
            &[
                PanelCall::VLine { x: 3, y: 1, len: 7, color: C },
                PanelCall::HLine { x: 1, y: 3, len: 7, color: C },
                PanelCall::Line { x0: 1, y0: 1, x1: 8, y1: 8, color: C },
            ]
        );
    }

    #[test]
    fn test_rect_fill_flag() {
        let mut panel = RecordingPanel::new(64, 64);
        draw_rect(&mut panel, 1, 2, 3, 4, C, ShapeFill::Filled).unwrap();
        draw_rect(&mut panel, 1, 2, 3, 4, C, false.into()).unwrap();
        assert_eq!(
            panel.calls(),
            &[
                PanelCall::FillRect { x: 1, y: 2, w: 3, h: 4, color: C },
                PanelCall::DrawRect { x: 1, y: 2, w: 3, h: 4, color: C },
            ]
        );
    }

    #[test]
    fn test_circle_fill_flag() {
        let mut panel = RecordingPanel::new(64, 64);
        draw_circle(&mut panel, 10, 10, 5, C, true.into()).unwrap();
        draw_circle(&mut panel, 10, 10, 5, C, ShapeFill::Outline).unwrap();
        assert_eq!(
            panel.calls(),
            &[
                PanelCall::FillCircle { x: 10, y: 10, r: 5, color: C },
                PanelCall::DrawCircle { x: 10, y: 10, r: 5, color: C },
            ]
        );
    }
}
