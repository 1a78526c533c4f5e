//! Builds the passive volumes described by a JSON argument file and prints
//! the resulting registry contents.
//!
//! Usage:
//! ```text
//! cargo run --example build_module                          # bundled module.json
//! cargo run --example build_module -- path/to/args.json
//! RUST_LOG=passive_partial=trace cargo run --example build_module
//! ```

use std::error::Error;

use passive_partial::config::AlgorithmArguments;
use passive_partial::geometry::HexagonalWafer;
use passive_partial::passive::{BuildOptions, PassivePartial};
use passive_partial::registry::VolumeRegistry;

const DEFAULT_ARGS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/build_module/module.json");

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for passive_partial.
    // Override with RUST_LOG env var (e.g. RUST_LOG=passive_partial=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("passive_partial=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_ARGS.to_owned());
    let args = AlgorithmArguments::from_json(&std::fs::read_to_string(&path)?)?;
    let config = args.into_config()?;

    let mut materials: Vec<&str> = vec![config.material.as_str()];
    materials.extend(config.layers.iter().map(|l| l.material.as_str()));
    let mut registry = VolumeRegistry::with_materials(materials);

    let report = PassivePartial::new(&config)
        .with_options(BuildOptions {
            verbose: tracing::enabled!(target: "passive_partial", tracing::Level::TRACE),
        })
        .execute(&mut registry, &HexagonalWafer)?;
    report.emit();

    for variant in &report.variants {
        println!(
            "{} (partial {}, placement {}): {} layers, {:.4} of {:.4}",
            variant.name,
            variant.partial_type,
            variant.placement_index,
            variant.layers.placed.len(),
            variant.layers.accumulated_thickness,
            config.thickness
        );
        for placed in &variant.layers.placed {
            let volume = registry.volume(placed.volume)?;
            println!("  {:<40} copy {:>2} at z = {:+.4}", volume.name, placed.copy_number, placed.z);
        }
    }
    println!("{} volumes registered", registry.volume_count());
    Ok(())
}
