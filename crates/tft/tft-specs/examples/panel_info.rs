//! Panel Information Example
//!
//! Prints every supported panel variant and the geometry a session draws on.
//!
//! Run with: cargo run -p tft-specs --example panel_info

use tft_specs::{PanelSpec, PanelVariant};

fn print_panel_info(variant: PanelVariant, spec: &PanelSpec) {
    println!("\n{}", "=".repeat(60));
    println!("Panel: {} (config key `{}`)", spec.name, variant);
    println!("{}", "=".repeat(60));

    let (w, h) = spec.rotated_dimensions();
    println!("  Controller: {}", spec.controller.name());
    println!("  Native resolution: {}×{} pixels", spec.width, spec.height);
    println!(
        "  Session rotation: {} quarter turn(s) → {}×{}",
        spec.rotation.quarter_turns(),
        w,
        h
    );
    println!("  Color depth: {} bits", spec.color_depth_bits);
    match spec.backlight_pin {
        Some(pin) => println!("  Backlight: GPIO {pin} (driven high at init)"),
        None => println!("  Backlight: always on"),
    }
}

fn main() {
    for variant in PanelVariant::ALL {
        print_panel_info(variant, variant.spec());
    }
}
