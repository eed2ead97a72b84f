//! Panel variant selection
//!
//! A build targets one board; which one is decided once at start-up from
//! configuration, then every later call goes through the resolved
//! [`PanelSpec`].

use core::fmt;
use core::str::FromStr;

use crate::displays::{CITILAB_ED1_ST7735, IOT_BUS_ILI9341};
use crate::PanelSpec;

/// The panel variants the primitive layer supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelVariant {
    /// ST7735 128×128, native orientation
    #[default]
    St7735,
    /// ILI9341 240×320, run in landscape
    Ili9341,
}

impl PanelVariant {
    /// All supported variants
    pub const ALL: [PanelVariant; 2] = [PanelVariant::St7735, PanelVariant::Ili9341];

    /// Resolve the variant to its static panel specification
    pub fn spec(self) -> &'static PanelSpec {
        match self {
            Self::St7735 => &CITILAB_ED1_ST7735,
            Self::Ili9341 => &IOT_BUS_ILI9341,
        }
    }

    /// Configuration key for this variant
    pub fn key(self) -> &'static str {
        match self {
            Self::St7735 => "st7735",
            Self::Ili9341 => "ili9341",
        }
    }
}

impl fmt::Display for PanelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a configuration string names no known panel variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVariant;

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown panel variant (expected one of: st7735, ili9341)")
    }
}

impl FromStr for PanelVariant {
    type Err = UnknownVariant;

    /// Case-insensitive; accepts the chip name or the board name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("st7735") || s.eq_ignore_ascii_case("ed1") {
            Ok(Self::St7735)
        } else if s.eq_ignore_ascii_case("ili9341") || s.eq_ignore_ascii_case("iot-bus") {
            Ok(Self::Ili9341)
        } else {
            Err(UnknownVariant)
        }
    }
}
