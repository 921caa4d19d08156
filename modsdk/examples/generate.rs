//! Example generating a header for one platform from the bundled schema.
//!
//! Run with: `cargo run --example generate -- mac`

use modsdk::prelude::*;

const SCHEMA: &str = include_str!("../schemas/Classes.xml");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let platform = match std::env::args().nth(1) {
        Some(name) => Platform::parse(&name).ok_or_else(|| format!("unknown platform '{name}'"))?,
        None => Platform::host(),
    };

    let root = parse_schema(SCHEMA)?;
    validate_schema(&root)?;

    let header = HeaderGenerator::new(&root, GeneratorConfig::new().platform(platform)).generate()?;

    println!("// {} classes, platform {}", root.len(), platform);
    print!("{header}");
    Ok(())
}
