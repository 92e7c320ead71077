//! Report driver.
//!
//! Runs every configured strategy against every configured sample size,
//! strategy-major and size-minor. Each combination writes:
//!
//! ```text
//! Method: <label>, n = <size>
//! <table with header>
//!
//! ```

use std::io::Write;

use tracing::info;

use crate::config::RunConfig;
use crate::error::Result;
use crate::rng::Generator;
use crate::stats::summarize;
use crate::table::TableRenderer;

/// Writes the default report using the process-wide generator.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    run_with(&RunConfig::default(), &Generator::default(), out)
}

/// Writes the report for `config`, drawing samples from `generator`.
///
/// # Errors
///
/// Returns [`RandStatError::Config`](crate::RandStatError::Config) if the
/// configuration is invalid, or [`RandStatError::Io`](crate::RandStatError::Io)
/// if writing fails.
pub fn run_with<W: Write>(
    config: &RunConfig,
    generator: &Generator<'_>,
    out: &mut W,
) -> Result<()> {
    config.validate()?;
    let renderer = TableRenderer::with_column_width(config.column_width());

    for &strategy in config.strategies() {
        for &n in config.sample_sizes() {
            writeln!(out, "Method: {}, n = {}", strategy.label(), n)?;

            let sample = generator.generate(n, strategy);
            let stats = summarize(&sample);
            info!(
                %strategy,
                n,
                mean = stats.mean(),
                std_dev = stats.std_dev(),
                "summarised sample"
            );

            out.write_all(renderer.render(&stats, true).as_bytes())?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
