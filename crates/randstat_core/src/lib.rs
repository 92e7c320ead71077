//! # randstat_core: Uniform Sampling and Summary Statistics
//!
//! Generates samples of uniform variates in [0, 1) from three interchangeable
//! random sources, reduces each sample to five summary statistics and renders
//! them as a fixed-width text table.
//!
//! ## Module Structure
//!
//! - [`rng`]: Random sources, the [`Strategy`] selector and sample generation
//! - [`stats`]: [`Statistics`] (count, mean, sample std dev, min, max)
//! - [`table`]: Fixed-width table rendering
//! - [`driver`]: Runs every strategy against every sample size
//! - [`config`]: Run parameters with builder validation
//! - [`error`]: [`RandStatError`] and the crate [`Result`] alias
//!
//! ## Usage Example
//!
//! ```rust
//! use randstat_core::rng::{Generator, SharedRng, Strategy};
//! use randstat_core::{stats, table};
//!
//! let shared = SharedRng::from_seed(42);
//! let generator = Generator::new(&shared);
//!
//! let sample = generator.generate(100, Strategy::ThreadLocal);
//! let summary = stats::summarize(&sample);
//! assert_eq!(summary.count(), 100.0);
//!
//! let text = table::render(&summary, true);
//! assert!(text.contains("stddev"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`Statistics`] and [`Strategy`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod driver;
pub mod error;
pub mod rng;
pub mod stats;
pub mod table;

pub use error::{RandStatError, Result};
pub use rng::{Sample, Strategy};
pub use stats::Statistics;
