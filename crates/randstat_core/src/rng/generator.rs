//! Strategy dispatch for sample generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{Sample, SharedRng, Strategy};
use crate::error::Result;

/// Generates samples, dispatching each request to the selected source.
///
/// Holds a borrowed handle to the shared source; the general-purpose and
/// thread-local sources need no handle.
///
/// # Examples
///
/// ```rust
/// use randstat_core::rng::{Generator, SharedRng, Strategy};
///
/// let shared = SharedRng::from_seed(7);
/// let generator = Generator::new(&shared);
///
/// for strategy in Strategy::ALL {
///     let sample = generator.generate(50, strategy);
///     assert_eq!(sample.len(), 50);
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
    shared: &'a SharedRng,
}

impl<'a> Generator<'a> {
    /// Creates a generator bound to the given shared source.
    #[inline]
    pub fn new(shared: &'a SharedRng) -> Self {
        Self { shared }
    }

    /// Returns the shared source this generator draws from.
    #[inline]
    pub fn shared(&self) -> &'a SharedRng {
        self.shared
    }

    /// Generates `n` uniform values in [0, 1) from the selected source.
    ///
    /// `n == 0` yields an empty sample.
    pub fn generate(&self, n: usize, strategy: Strategy) -> Sample {
        let mut values = vec![0.0; n];
        match strategy {
            Strategy::GeneralPurpose => fill_general_purpose(&mut values),
            Strategy::SharedDefault => self.shared.fill_uniform(&mut values),
            Strategy::ThreadLocal => fill_thread_local(&mut values),
        }
        debug!(%strategy, n, "generated sample");
        Sample::from(values)
    }

    /// Generates `n` values using a zero-based raw strategy selector.
    ///
    /// # Errors
    ///
    /// Returns [`RandStatError::InvalidArgument`](crate::RandStatError::InvalidArgument)
    /// if `index` is not 0, 1 or 2. No values are drawn in that case.
    pub fn generate_by_index(&self, n: usize, index: u32) -> Result<Sample> {
        let strategy = Strategy::from_index(index)?;
        Ok(self.generate(n, strategy))
    }
}

impl Default for Generator<'static> {
    fn default() -> Self {
        Self::new(SharedRng::global())
    }
}

/// Generates `n` values with the process-wide generator.
pub fn generate(n: usize, strategy: Strategy) -> Sample {
    Generator::default().generate(n, strategy)
}

/// Generates `n` values with the process-wide generator from a raw selector.
///
/// # Errors
///
/// Returns [`RandStatError::InvalidArgument`](crate::RandStatError::InvalidArgument)
/// for an unsupported selector.
pub fn generate_by_index(n: usize, index: u32) -> Result<Sample> {
    Generator::default().generate_by_index(n, index)
}

fn fill_general_purpose(buffer: &mut [f64]) {
    let mut rng = StdRng::from_entropy();
    for value in buffer.iter_mut() {
        *value = rng.gen();
    }
}

fn fill_thread_local(buffer: &mut [f64]) {
    let mut rng = rand::thread_rng();
    for value in buffer.iter_mut() {
        *value = rng.gen();
    }
}
