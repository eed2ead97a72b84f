//! Ilitek controller panels

use crate::{Controller, PanelSpec, Rotation};

/// IoT-Bus board: 2.4" 240×320 ILI9341 module.
///
/// Natively portrait; the session turns it a quarter clockwise so drawing
/// happens on a 320×240 landscape surface.
///
/// # Board wiring
/// - Backlight on GPIO 33, must be driven high after init
pub const IOT_BUS_ILI9341: PanelSpec = PanelSpec {
    name: "IoT-Bus 2.4\" ILI9341",
    width: 240,
    height: 320,
    controller: Controller::ILI9341,
    rotation: Rotation::Degrees90,
    color_depth_bits: 16,
    backlight_pin: Some(33),
};
