//! `headergen`: generates the SDK's C++ class header from a schema file.
//!
//! Run with: `cargo run --bin headergen -- schemas/Classes.xml -o GeneratedHeader.hpp`

use clap::Parser;
use modsdk::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}
