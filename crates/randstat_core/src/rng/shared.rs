//! Process-wide random source shared behind a mutex.
//!
//! This module provides [`SharedRng`], the source behind
//! [`Strategy::SharedDefault`](super::Strategy::SharedDefault).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// A random source shared by every caller in the process.
///
/// Wraps a `StdRng` in a [`Mutex`] so a single instance can be reused from
/// anywhere, including a `static`. Every draw advances the same stream.
///
/// # Examples
///
/// ```rust
/// use randstat_core::rng::SharedRng;
///
/// let rng = SharedRng::from_seed(42);
///
/// let u = rng.gen_uniform();
/// assert!((0.0..1.0).contains(&u));
///
/// let mut buffer = vec![0.0; 100];
/// rng.fill_uniform(&mut buffer);
/// ```
pub struct SharedRng {
    /// The underlying PRNG instance.
    inner: Mutex<StdRng>,
    /// Seed used for initialisation, `None` when seeded from OS entropy.
    seed: Option<u64>,
}

impl SharedRng {
    /// Creates a shared source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: Mutex::new(StdRng::from_entropy()),
            seed: None,
        }
    }

    /// Creates a shared source initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstat_core::rng::SharedRng;
    ///
    /// let a = SharedRng::from_seed(12345);
    /// let b = SharedRng::from_seed(12345);
    /// assert_eq!(a.gen_uniform(), b.gen_uniform());
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    /// Returns the process-wide instance, creating it on first use.
    pub fn global() -> &'static SharedRng {
        static GLOBAL: OnceLock<SharedRng> = OnceLock::new();
        GLOBAL.get_or_init(SharedRng::from_entropy)
    }

    /// Returns the seed used for initialisation, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    pub fn gen_uniform(&self) -> f64 {
        self.lock().gen()
    }

    /// Fills the buffer with uniform random values in [0, 1).
    ///
    /// The lock is held for the whole buffer, so a batch is one contiguous
    /// run of the shared stream. Empty buffers are a no-op.
    pub fn fill_uniform(&self, buffer: &mut [f64]) {
        let mut rng = self.lock();
        for value in buffer.iter_mut() {
            *value = rng.gen();
        }
    }

    // A panic while holding the lock cannot leave StdRng in a torn state.
    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl fmt::Debug for SharedRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRng")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
