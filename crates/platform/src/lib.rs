//! Hardware Abstraction Layer for the TFT primitive layer
//!
//! This crate defines the contract between the primitive layer and whatever
//! actually puts pixels on glass, so the primitives can be developed and
//! tested without a panel attached.
//!
//! # Architecture Layers
//!
//! ```text
//! VM primitive registry (tft-prims::prims)
//!         ↓
//! Primitive surface / session (tft-prims)
//!         ↓
//! Platform HAL (this crate - PanelDriver contract)
//!         ↓
//! Panel backend (GraphicsPanel over an embedded-graphics DrawTarget,
//!                the headless emulator, or the recording mock)
//! ```
//!
//! # Abstraction Levels
//!
//! - [`PanelDriver`] - Adafruit-GFX style panel operations in RGB565
//! - [`GraphicsPanel`] - `PanelDriver` for any `DrawTarget<Color = Rgb565>`
//! - [`Color16`] - panel-native RGB565 color word
//!
//! # Features
//!
//! - `std`: Expose [`mocks`] to other crates' tests
//! - `defmt`: Enable defmt logging derives
//!
//! # Example
//!
//! ```
//! use platform::{Color16, PanelDriver};
//!
//! fn clear<D: PanelDriver>(panel: &mut D) -> Result<(), D::Error> {
//!     panel.fill_screen(Color16::BLACK)
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
// Pedantic lints suppressed for this HAL crate:
#![allow(clippy::doc_markdown)] // chip names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod color;
pub mod display;
pub mod graphics;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main high-level traits and types
pub use color::Color16;
pub use display::PanelDriver;
pub use graphics::GraphicsPanel;

// Panel description types are part of the driver contract.
pub use tft_specs::{Controller, PanelSpec, Rotation};
