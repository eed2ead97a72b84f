//! Panel-native color word
//!
//! Both supported controllers take 16-bit RGB565 pixels: 5 bits red in
//! 15..=11, 6 bits green in 10..=5, 5 bits blue in 4..=0.

// Channel shifts act on masked values that fit their target width.
#![allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// RGB565 color as written to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color16(pub u16);

impl Color16 {
    /// All channels off (also the panel background)
    pub const BLACK: Self = Self(0x0000);
    /// Full-scale green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// All channels full scale
    pub const WHITE: Self = Self(0xFFFF);

    /// Raw 16-bit word
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel, 0..=31
    pub const fn red5(self) -> u8 {
        ((self.0 >> 11) & 0x1F) as u8
    }

    /// Green channel, 0..=63
    pub const fn green6(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel, 0..=31
    pub const fn blue5(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

impl From<Color16> for Rgb565 {
    fn from(color: Color16) -> Self {
        Rgb565::new(color.red5(), color.green6(), color.blue5())
    }
}

impl From<Rgb565> for Color16 {
    fn from(color: Rgb565) -> Self {
        let (r, g, b) = (u16::from(color.r()), u16::from(color.g()), u16::from(color.b()));
        Self((r << 11) | (g << 5) | b)
    }
}
