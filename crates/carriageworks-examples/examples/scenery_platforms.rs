//! Scenery platform example: simple vs rotational-symmetry platforms.
//!
//! Builds both platform variants for the same car mesh and prints them side
//! by side, showing the extra duplication context and axis child the
//! symmetric variant adds on top of the shared base structure.
//!
//! Run with: `cargo run -p carriageworks-examples --example scenery_platforms`

use carriageworks_prefab::*;

fn main() {
    let simple = simple_scenery_platform("CarPlatform_Wide", "Front");

    // Rear platform mirrors the front one around the car's vertical axis.
    let symmetric = rotational_symmetry_scenery_platform(
        "CarPlatform_Wide",
        "Rear",
        transform(DVec3::ZERO, DVec3::new(0.0, std::f64::consts::PI, 0.0), 1.0),
    );

    println!("--- simple platform ---");
    for line in dump_lines(&simple) {
        println!("{line}");
    }

    println!();
    println!("--- rotational symmetry platform ---");
    for line in dump_lines(&symmetric) {
        println!("{line}");
    }

    println!();
    println!(
        "symmetric platform adds {} component(s) and {} child(ren)",
        symmetric.components.len() - simple.components.len(),
        symmetric.children.len() - simple.children.len(),
    );
}
