//! RGB888 → RGB565 color reduction
//!
//! The VM hands colors around as 24-bit `0xRRGGBB` integers; both panel
//! controllers want RGB565. Every drawing primitive reduces its color
//! argument exactly once, on the way in. The reduction keeps the top 5/6/5
//! bits of red/green/blue and drops the rest; there is no way back.

// Shifts and casts below act on masked 8-bit channels and cannot overflow.
#![allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]

use platform::Color16;

/// 24-bit `0xRRGGBB` color as received from the VM
///
/// Bits above 23 are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color24(pub u32);

impl Color24 {
    /// Black
    pub const BLACK: Self = Self(0x00_0000);
    /// Pure green; reduces to the grid "on" color
    pub const GREEN: Self = Self(0x00_FF00);
    /// White
    pub const WHITE: Self = Self(0xFF_FFFF);

    /// Build from 8-bit channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Red channel
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Reduce to the panel-native RGB565 word
    pub const fn to_color16(self) -> Color16 {
        reduce_color(self)
    }
}

impl From<u32> for Color24 {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Reduce a 24-bit color to RGB565.
///
/// `rrrrrggg gggbbbbb` from the high 5/6/5 bits of the input channels.
pub const fn reduce_color(color: Color24) -> Color16 {
    let r = color.red() as u16;
    let g = color.green() as u16;
    let b = color.blue() as u16;
    Color16(((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3))
}
