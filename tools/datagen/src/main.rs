//! CLI entry point for the synthetic order flow generator
//!
//! Writes CSV order-event data to a file or standard output. On a file
//! write failure the full run is regenerated to stdout with the same seed
//! and start time, so the emitted rows match what the file would have held.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use datagen::config::GeneratorConfig;
use datagen::{generate_to_file, generate_to_stdout};
use std::path::PathBuf;

/// Generate synthetic order-event CSV data for matching-engine testing
#[derive(Debug, Parser)]
#[command(name = "datagen", version)]
struct Cli {
    /// Number of data rows to generate (excluding the header)
    num_lines: u64,

    /// Output CSV path; prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// RNG seed; drawn from system entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for generated data.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig::default();
    let seed = cli.seed.unwrap_or_else(rand::random);
    let start_ns = Utc::now().timestamp_nanos_opt().unwrap_or(0);

    match &cli.output {
        Some(path) => {
            match generate_to_file(config.clone(), seed, start_ns, cli.num_lines, path) {
                Ok(()) => {
                    tracing::info!(
                        "Successfully generated {} lines to {}",
                        cli.num_lines,
                        path.display()
                    );
                }
                Err(err) => {
                    tracing::error!("Error writing to file {}: {}", path.display(), err);
                    tracing::warn!("Falling back to generating data on stdout");
                    generate_to_stdout(config, seed, start_ns, cli.num_lines)?;
                }
            }
        }
        None => generate_to_stdout(config, seed, start_ns, cli.num_lines)?,
    }

    Ok(())
}
