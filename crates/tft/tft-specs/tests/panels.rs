//! Panel table checks: every shipped variant must be drawable by the
//! 5×5 grid emulation and must be an RGB565 panel.

use tft_specs::displays::{CITILAB_ED1_ST7735, IOT_BUS_ILI9341};
use tft_specs::PanelVariant;

#[test]
fn every_variant_is_rgb565() {
    for variant in PanelVariant::ALL {
        assert_eq!(variant.spec().color_depth_bits, 16, "{}", variant.spec().name);
    }
}

#[test]
fn every_variant_fits_the_grid() {
    // Five cells plus six 3px gaps need at least 23px on the short side.
    for variant in PanelVariant::ALL {
        let (w, h) = variant.spec().rotated_dimensions();
        assert!(w.min(h) >= 23, "{} too small", variant.spec().name);
    }
}

#[test]
fn ili9341_runs_landscape_with_backlight() {
    assert_eq!(IOT_BUS_ILI9341.rotated_dimensions(), (320, 240));
    assert!(IOT_BUS_ILI9341.is_landscape());
    assert_eq!(IOT_BUS_ILI9341.backlight_pin, Some(33));
}

#[test]
fn st7735_is_square_without_backlight_pin() {
    assert_eq!(CITILAB_ED1_ST7735.rotated_dimensions(), (128, 128));
    assert_eq!(CITILAB_ED1_ST7735.backlight_pin, None);
}

#[cfg(feature = "serde")]
#[test]
fn variant_serializes_lowercase() {
    let json = serde_json::to_string(&PanelVariant::Ili9341).unwrap();
    assert_eq!(json, "\"ili9341\"");
    let back: PanelVariant = serde_json::from_str("\"st7735\"").unwrap();
    assert_eq!(back, PanelVariant::St7735);
}
