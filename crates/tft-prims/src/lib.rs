//! TFT display primitives for the VM
//!
//! Lets bytecode running in the VM draw on a colour TFT panel through a
//! small, hardware-agnostic primitive set, whichever controller the board
//! carries.
//!
//! # Architecture
//!
//! ```text
//! VM dispatch ──► prims (argument decoding, "tft" primitive set)
//!                   ↓
//!                 surface (TftSurface: one method per primitive)
//!                   ↓            ↓
//!              color codec   geometry / grid
//!                   ↓            ↓
//!                 session (enable state, owns the PanelDriver)
//!                   ↓
//!                 platform::PanelDriver
//! ```
//!
//! - [`color`] - RGB888 → RGB565 reduction applied to every color argument
//! - [`geometry`] - routes axis-aligned lines to fast runs, filled/outline
//!   shapes to the matching driver call
//! - [`grid`] - emulates a 5×5 LED matrix on an arbitrary panel
//! - [`session`] - enable/disable state machine and one-time panel init
//! - [`surface`] - the typed primitive API
//! - [`prims`] - the `"tft"` primitive table the VM registers
//! - [`config`] - panel variant and grid colors, from code, env or serde
//!
//! # Example
//!
//! ```
//! use platform::mocks::RecordingPanel;
//! use tft_prims::{Color24, SessionConfig, TftSurface};
//!
//! let config = SessionConfig::default();
//! let panel = RecordingPanel::for_spec(config.variant.spec());
//! let mut tft = TftSurface::new(panel, config);
//!
//! tft.enable_display(true).unwrap();
//! tft.line(0, 0, 0, 50, Color24(0xFF0000)).unwrap();
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
// Logging discipline (allow println in tests via clippy.toml)
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)] // common in Rust crates; not a real issue
#![allow(clippy::missing_errors_doc)] // driver errors pass through unchanged
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)] // x0/x1, y0/y1

pub mod color;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod prims;
pub mod session;
pub mod surface;

// Re-export key types
pub use color::{reduce_color, Color24};
pub use config::{ConfigError, SessionConfig};
pub use geometry::{LineRoute, ShapeFill};
pub use grid::{Cell, CellFill, GridBitmask, GridError, GridLayout, GridPalette, GridPlan};
pub use prims::{call, ArgKind, PrimEntry, PrimError, Value, PRIMITIVES, PRIMITIVE_SET};
pub use session::{Session, SessionState};
pub use surface::TftSurface;

pub use platform::{Color16, PanelDriver};
