//! Sitronix controller panels

use crate::{Controller, PanelSpec, Rotation};

/// Citilab ED1 board: 1.44" 128×128 ST7735 "green tab" module.
///
/// Square panel, driven in its native orientation. The backlight is tied on
/// by the board.
pub const CITILAB_ED1_ST7735: PanelSpec = PanelSpec {
    name: "Citilab ED1 1.44\" ST7735",
    width: 128,
    height: 128,
    controller: Controller::ST7735,
    rotation: Rotation::Degrees0,
    color_depth_bits: 16,
    backlight_pin: None,
};
