//! Hash-join benchmark generator CLI.
//!
//! Writes one complete TPL benchmark program covering the full column-count
//! x row-count x cardinality sweep to stdout. The sweep is fixed, so there
//! is nothing to configure; diagnostics go to stderr so stdout carries only
//! program text.

use std::io::Write;

use clap::Parser;
use tracing::debug;

/// Hash-join benchmark program generator
#[derive(Parser, Debug)]
#[command(name = "joinbench")]
#[command(version, about = "Generates TPL hash-join benchmark programs")]
pub struct Args {}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("joinbench_gen=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let _args = Args::parse();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let text = joinbench_gen::generate_text()?;
    debug!(bytes = text.len(), "generated program");

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(text.as_bytes())?;
    Ok(())
}
