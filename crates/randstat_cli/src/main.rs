//! randstat CLI - Uniform Random Source Report
//!
//! Generates samples of 10, 100 and 10 000 uniform variates from each of
//! three random sources and prints a summary table for every combination.
//!
//! # Usage
//!
//! - `randstat` - Print the nine summary tables to stdout
//! - `randstat --verbose` - Also log each generated sample to stderr
//!
//! `RUST_LOG` overrides the log filter when set.

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;

use error::Result;

/// Compare uniform random sources by their summary statistics
#[derive(Parser)]
#[command(name = "randstat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Tables go to stdout; keep logs off it.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    randstat_core::driver::run(&mut out)?;

    info!("Report complete");
    Ok(())
}
