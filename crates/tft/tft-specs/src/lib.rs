//! TFT Panel Specifications
//!
//! Static descriptions of the colour TFT panels the primitive layer can drive:
//! native resolution, controller chip, the rotation a session runs them in,
//! and the board wiring that matters at init time.
//!
//! # Features
//!
//! - **no_std compatible** - Works on embedded systems
//! - **Panel templates** - Pre-configured specs for the ST7735 and ILI9341 boards
//! - **Serde support** - Optional serialization/deserialization for TOML/JSON configs
//!
//! # Example
//!
//! ```
//! use tft_specs::{PanelVariant, Rotation};
//!
//! let spec = PanelVariant::Ili9341.spec();
//! assert_eq!((spec.width, spec.height), (240, 320));
//! assert_eq!(spec.rotation, Rotation::Degrees90);
//! // The session runs this panel in landscape.
//! assert_eq!(spec.rotated_dimensions(), (320, 240));
//! ```
//!
//! # Custom Panel Specs
//!
//! ```
//! use tft_specs::{Controller, PanelSpec, Rotation};
//!
//! const MY_PANEL: PanelSpec = PanelSpec {
//!     name: "Custom 1.8\" panel",
//!     width: 128,
//!     height: 160,
//!     controller: Controller::ST7735,
//!     rotation: Rotation::Degrees0,
//!     color_depth_bits: 16,
//!     backlight_pin: None,
//! };
//! assert!(!MY_PANEL.is_landscape());
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod displays;
mod panel_spec;
mod variant;

pub use panel_spec::{Controller, PanelSpec, Rotation};
pub use variant::{PanelVariant, UnknownVariant};
