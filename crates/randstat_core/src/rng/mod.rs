//! # Random Sample Generation
//!
//! Produces samples of uniform variates in [0, 1) from one of three
//! interchangeable random sources, selected by [`Strategy`].
//!
//! ## Sources
//!
//! | Strategy | Source | Lifetime |
//! |----------|--------|----------|
//! | [`Strategy::GeneralPurpose`] | `StdRng` seeded from OS entropy | fresh per call |
//! | [`Strategy::SharedDefault`] | [`SharedRng`] behind a mutex | process-wide |
//! | [`Strategy::ThreadLocal`] | `rand::thread_rng()` | per thread |
//!
//! The process-wide and thread-local sources are shared state. [`Generator`]
//! borrows the shared handle explicitly so tests can substitute a seeded
//! instance; [`Generator::default`] binds to [`SharedRng::global`].
//!
//! ## Usage Example
//!
//! ```rust
//! use randstat_core::rng::{generate_by_index, Generator, SharedRng, Strategy};
//!
//! let shared = SharedRng::from_seed(12345);
//! let generator = Generator::new(&shared);
//!
//! let sample = generator.generate(1000, Strategy::SharedDefault);
//! assert_eq!(sample.len(), 1000);
//! assert!(sample.iter().all(|&v| (0.0..1.0).contains(&v)));
//!
//! // Selectors are zero-based; anything outside {0, 1, 2} is rejected.
//! assert!(generate_by_index(10, 99).is_err());
//! ```

mod generator;
mod sample;
mod shared;
mod strategy;

// Public re-exports
pub use generator::{generate, generate_by_index, Generator};
pub use sample::Sample;
pub use shared::SharedRng;
pub use strategy::Strategy;
