//! GraphicsPanel behaviour against a pixel canvas.
//!
//! Run with: cargo test -p platform --features std --test graphics_panel

#![cfg(feature = "std")]

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use platform::mocks::Canvas;
use platform::{Color16, GraphicsPanel, PanelDriver, Rotation};

const ROTATIONS: [Rotation; 4] = [
    Rotation::Degrees0,
    Rotation::Degrees90,
    Rotation::Degrees180,
    Rotation::Degrees270,
];

#[test]
fn fill_screen_ignores_rotation() {
    let mut panel = GraphicsPanel::new(Canvas::new(24, 32));
    panel.set_rotation(Rotation::Degrees90).unwrap();
    panel.fill_screen(Color16::GREEN).unwrap();
    assert_eq!(panel.target().count(Rgb565::GREEN), 24 * 32);
}

#[test]
fn outline_rect_stays_inside_bounds() {
    let mut panel = GraphicsPanel::new(Canvas::new(16, 16));
    panel.draw_rect(2, 2, 4, 3, Color16::WHITE).unwrap();
    // Perimeter of a 4×3 box: 2*4 + 2*(3-2) = 10 pixels.
    assert_eq!(panel.target().count(Rgb565::WHITE), 10);
    assert_eq!(panel.target().get(2, 2), Some(Rgb565::WHITE));
    assert_eq!(panel.target().get(5, 4), Some(Rgb565::WHITE));
    assert_eq!(panel.target().get(6, 4), Some(Rgb565::BLACK));
    assert_eq!(panel.target().get(3, 3), Some(Rgb565::BLACK));
}

#[test]
fn diagonal_line_hits_both_endpoints() {
    let mut panel = GraphicsPanel::new(Canvas::new(16, 16));
    panel.draw_line(1, 1, 9, 5, Color16::WHITE).unwrap();
    assert_eq!(panel.target().get(1, 1), Some(Rgb565::WHITE));
    assert_eq!(panel.target().get(9, 5), Some(Rgb565::WHITE));
}

#[test]
fn backlight_is_remembered() {
    let mut panel = GraphicsPanel::new(Canvas::new(4, 4));
    assert_eq!(panel.backlight(), None);
    panel.set_backlight(33, true).unwrap();
    assert_eq!(panel.backlight(), Some((33, true)));
}

proptest::proptest! {
    /// Every in-bounds logical pixel lands on exactly one native pixel,
    /// whatever the rotation.
    #[test]
    fn rotated_pixels_land_on_the_canvas(
        turns in 0u8..4,
        x in 0i32..40,
        y in 0i32..40,
    ) {
        let mut panel = GraphicsPanel::new(Canvas::new(30, 40));
        let rotation = Rotation::from_quarter_turns(turns);
        panel.set_rotation(rotation).unwrap();
        panel.draw_pixel(x, y, Color16::WHITE).unwrap();

        let inside = u32::try_from(x).unwrap() < panel.width()
            && u32::try_from(y).unwrap() < panel.height();
        let lit = panel.target().count(Rgb565::WHITE);
        proptest::prop_assert_eq!(lit, usize::from(inside));
    }
}

#[test]
fn corners_map_to_distinct_native_corners() {
    for rotation in ROTATIONS {
        let mut panel = GraphicsPanel::new(Canvas::new(30, 40));
        panel.set_rotation(rotation).unwrap();
        let (w, h) = (panel.width() as i32, panel.height() as i32);
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            panel.draw_pixel(x, y, Color16::WHITE).unwrap();
        }
        let canvas = panel.target();
        assert_eq!(canvas.count(Rgb565::WHITE), 4, "{rotation:?}");
        for (x, y) in [(0, 0), (29, 0), (0, 39), (29, 39)] {
            assert_eq!(canvas.get(x, y), Some(Rgb565::WHITE), "{rotation:?}");
        }
    }
}
