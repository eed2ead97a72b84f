//! Session configuration
//!
//! Which panel the build drives and the two grid colors. Defaults match the
//! ED1 board: ST7735 panel, green cells on black.
//!
//! With `std`, [`SessionConfig::from_env`] picks the variant from the
//! `TFT_PANEL` environment variable. With `serde`, the config deserializes
//! from any serde format; colors are plain `0xRRGGBB` integers.

use thiserror_no_std::Error;
use tft_specs::PanelVariant;

use crate::color::Color24;

/// Environment variable naming the panel variant
pub const PANEL_ENV_VAR: &str = "TFT_PANEL";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configured panel name matches no supported variant
    #[error("unknown panel variant {0:?} (expected one of: st7735, ili9341)")]
    UnknownVariant(heapless::String<16>),
}

/// Display session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionConfig {
    /// Panel the session drives
    pub variant: PanelVariant,
    /// Color of a lit grid cell
    pub on_color: Color24,
    /// Color of an unlit grid cell and of the cleared screen
    pub off_color: Color24,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            variant: PanelVariant::default(),
            on_color: Color24::GREEN,
            off_color: Color24::BLACK,
        }
    }
}

impl SessionConfig {
    /// Default colors on the given panel
    pub fn for_variant(variant: PanelVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Resolve a variant by name, keeping the default colors
    pub fn from_variant_name(name: &str) -> Result<Self, ConfigError> {
        name.parse::<PanelVariant>()
            .map(Self::for_variant)
            .map_err(|_| ConfigError::UnknownVariant(truncated(name.trim())))
    }

    /// Read the variant from `TFT_PANEL`
    ///
    /// An unset (or non-unicode) variable yields the default config; a set
    /// but unrecognised one is an error rather than a silent fallback.
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(PANEL_ENV_VAR) {
            Ok(name) => Self::from_variant_name(&name),
            Err(_) => Ok(Self::default()),
        }
    }
}

fn truncated(name: &str) -> heapless::String<16> {
    let mut out = heapless::String::new();
    for ch in name.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
