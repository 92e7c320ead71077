//! Run configuration.
//!
//! [`RunConfig::default`] is the fixed report: every strategy against
//! sample sizes 10, 100 and 10 000 with 15-character columns. Tests and
//! embedders can build smaller runs with [`RunConfig::builder`].

use crate::error::{RandStatError, Result};
use crate::rng::Strategy;
use crate::table::COLUMN_WIDTH;

/// Sample sizes of the default run: small, medium and large.
pub const SAMPLE_SIZES: [usize; 3] = [10, 100, 10_000];

/// Parameters of a report run.
///
/// # Examples
///
/// ```rust
/// use randstat_core::config::RunConfig;
/// use randstat_core::rng::Strategy;
///
/// let config = RunConfig::builder()
///     .strategies(vec![Strategy::ThreadLocal])
///     .sample_sizes(vec![5, 50])
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.sample_sizes(), &[5, 50]);
/// assert_eq!(config.column_width(), 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    strategies: Vec<Strategy>,
    sample_sizes: Vec<usize>,
    column_width: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            sample_sizes: SAMPLE_SIZES.to_vec(),
            column_width: COLUMN_WIDTH,
        }
    }
}

impl RunConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Strategies, in run order.
    #[inline]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Sample sizes, in run order within each strategy.
    #[inline]
    pub fn sample_sizes(&self) -> &[usize] {
        &self.sample_sizes
    }

    /// Table column width.
    #[inline]
    pub fn column_width(&self) -> usize {
        self.column_width
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RandStatError::Config`] if:
    /// - no strategy is selected
    /// - no sample size is given
    /// - `column_width` is 0
    pub fn validate(&self) -> Result<()> {
        if self.strategies.is_empty() {
            return Err(RandStatError::config("at least one strategy is required"));
        }
        if self.sample_sizes.is_empty() {
            return Err(RandStatError::config("at least one sample size is required"));
        }
        if self.column_width == 0 {
            return Err(RandStatError::config("column_width must be greater than 0"));
        }
        Ok(())
    }
}

/// Builder for [`RunConfig`]; unset fields take the default run's values.
#[derive(Clone, Debug, Default)]
pub struct RunConfigBuilder {
    strategies: Option<Vec<Strategy>>,
    sample_sizes: Option<Vec<usize>>,
    column_width: Option<usize>,
}

impl RunConfigBuilder {
    /// Sets the strategies to run.
    #[inline]
    pub fn strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = Some(strategies);
        self
    }

    /// Sets the sample sizes to run for each strategy.
    #[inline]
    pub fn sample_sizes(mut self, sample_sizes: Vec<usize>) -> Self {
        self.sample_sizes = Some(sample_sizes);
        self
    }

    /// Sets the table column width.
    #[inline]
    pub fn column_width(mut self, column_width: usize) -> Self {
        self.column_width = Some(column_width);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RandStatError::Config`] if validation fails.
    pub fn build(self) -> Result<RunConfig> {
        let defaults = RunConfig::default();
        let config = RunConfig {
            strategies: self.strategies.unwrap_or(defaults.strategies),
            sample_sizes: self.sample_sizes.unwrap_or(defaults.sample_sizes),
            column_width: self.column_width.unwrap_or(defaults.column_width),
        };
        config.validate()?;
        Ok(config)
    }
}
