//! Draw a smiley on the emulated 5×5 grid plus a few primitives, save PNG
//!
//! Run with: cargo run -p tft-prims --example grid_demo -- [out.png]
//!
//! The panel comes from `TFT_PANEL` (st7735 or ili9341, default st7735).
//! Set `RUST_LOG=debug` to see the session transitions.

use anyhow::Context;
use tft_emulator::{Emulator, EmulatorConfig};
use tft_prims::{call, Color24, GridBitmask, SessionConfig, TftSurface, Value};

/// ```text
/// . # . # .
/// . # . # .
/// . . . . .
/// # . . . #
/// . # # # .
/// ```
const SMILEY: GridBitmask = GridBitmask(0b01110_10001_00000_01010_01010);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let out = std::env::args().nth(1).unwrap_or_else(|| "grid_demo.png".to_owned());
    let config = SessionConfig::from_env().context("reading TFT_PANEL")?;
    println!("Panel: {}", config.variant.spec().name);

    let emulator = Emulator::with_spec_and_config(config.variant.spec(), EmulatorConfig::SCALED_2X);
    let mut tft = TftSurface::new(emulator, config);

    // Through the primitive table, as the VM would
    call(&mut tft, "enableDisplay", &[Value::Bool(true)]).context("enableDisplay")?;
    tft.set_grid(SMILEY)?;
    tft.rect(0, 0, 20, 10, Color24(0xFF_0000), false)?;
    tft.circle(10, 30, 6, Color24(0x00_00FF), true)?;
    tft.text("tft", 0, 50, Color24::WHITE, 1, false)?;

    let emulator = tft.into_driver();
    emulator
        .screenshot(&out)
        .with_context(|| format!("writing {out}"))?;
    println!("Saved {out}");
    Ok(())
}
