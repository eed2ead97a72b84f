//! Panel specification types
//!
//! Defines the physical characteristics of a TFT panel that the primitive
//! layer and the emulator need: geometry, controller, session rotation and
//! board wiring.

/// Complete specification of a TFT panel variant.
///
/// `width` and `height` are the controller's *native* dimensions (rotation
/// 0°). The dimensions a session actually draws in are
/// [`rotated_dimensions`](Self::rotated_dimensions).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanelSpec {
    /// Panel name (e.g., "Citilab ED1 1.44\" ST7735")
    pub name: &'static str,

    /// Native width in pixels
    pub width: u32,

    /// Native height in pixels
    pub height: u32,

    /// Display controller chip
    pub controller: Controller,

    /// Rotation applied once at session init
    pub rotation: Rotation,

    /// Native color depth (RGB565 panels report 16)
    pub color_depth_bits: u8,

    /// GPIO that must be driven high to light the backlight, if the board
    /// does not tie it on permanently
    pub backlight_pin: Option<u8>,
}

impl PanelSpec {
    /// Dimensions in the session rotation (90°/270° swap width and height).
    pub fn rotated_dimensions(&self) -> (u32, u32) {
        self.rotation.apply_to_dimensions(self.width, self.height)
    }

    /// True when the session rotation makes the panel wider than tall.
    pub fn is_landscape(&self) -> bool {
        let (w, h) = self.rotated_dimensions();
        w > h
    }

    /// Number of pixels on the panel.
    pub fn pixel_count(&self) -> u32 {
        self.width.saturating_mul(self.height)
    }
}

/// TFT controller chips the primitive layer knows how to initialise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Controller {
    /// Sitronix ST7735 (1.44" 128×128 "green tab" modules)
    ST7735,
    /// Ilitek ILI9341 (2.4"/2.8" 240×320 modules)
    ILI9341,
}

impl Controller {
    /// Human-readable chip name
    pub fn name(self) -> &'static str {
        match self {
            Self::ST7735 => "ST7735",
            Self::ILI9341 => "ILI9341",
        }
    }
}

/// Display rotation modes
///
/// Values follow the controller MADCTL convention: the number of clockwise
/// quarter turns applied to the native scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// No rotation (native: width × height)
    #[default]
    Degrees0,
    /// Rotate 90° clockwise (height × width)
    Degrees90,
    /// Rotate 180° (width × height)
    Degrees180,
    /// Rotate 270° clockwise / 90° counter-clockwise (height × width)
    Degrees270,
}

impl Rotation {
    /// Check if rotation swaps width and height
    pub fn swaps_dimensions(&self) -> bool {
        matches!(self, Rotation::Degrees90 | Rotation::Degrees270)
    }

    /// Calculate drawing dimensions after rotation
    pub fn apply_to_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Clockwise quarter turns (0..=3), as written to the controller.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Self::Degrees0 => 0,
            Self::Degrees90 => 1,
            Self::Degrees180 => 2,
            Self::Degrees270 => 3,
        }
    }

    /// Inverse of [`quarter_turns`](Self::quarter_turns); only the low two
    /// bits are considered, as on the controllers.
    pub fn from_quarter_turns(turns: u8) -> Self {
        match turns & 0b11 {
            0 => Self::Degrees0,
            1 => Self::Degrees90,
            2 => Self::Degrees180,
            _ => Self::Degrees270,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_spec() -> PanelSpec {
        PanelSpec {
            name: "Test Panel",
            width: 128,
            height: 160,
            controller: Controller::ST7735,
            rotation: Rotation::Degrees0,
            color_depth_bits: 16,
            backlight_pin: None,
        }
    }

    #[test]
    fn test_rotated_dimensions_portrait() {
        let spec = test_spec();
        assert_eq!(spec.rotated_dimensions(), (128, 160));
        assert!(!spec.is_landscape());
    }

    #[test]
    fn test_rotated_dimensions_swap() {
        let spec = PanelSpec {
            rotation: Rotation::Degrees270,
            ..test_spec()
        };
        assert_eq!(spec.rotated_dimensions(), (160, 128));
        assert!(spec.is_landscape());
    }

    #[test]
    fn test_quarter_turns_round_trip() {
        for rotation in [
            Rotation::Degrees0,
            Rotation::Degrees90,
            Rotation::Degrees180,
            Rotation::Degrees270,
        ] {
            assert_eq!(Rotation::from_quarter_turns(rotation.quarter_turns()), rotation);
        }
        // Only the low two bits count.
        assert_eq!(Rotation::from_quarter_turns(5), Rotation::Degrees90);
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(test_spec().pixel_count(), 128 * 160);
    }
}
