//! Pre-configured panel specifications
//!
//! One module per controller vendor, one constant per board the firmware
//! ships on.

pub mod ilitek;
pub mod sitronix;

pub use ilitek::*;
pub use sitronix::*;
