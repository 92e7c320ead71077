//! Owned sequence of generated values.

use std::ops::Deref;

/// An ordered sequence of generated values in [0, 1).
///
/// Dereferences to `[f64]`, so it can be passed straight to
/// [`stats::summarize`](crate::stats::summarize).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Returns the values as a slice.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the sample and returns the underlying vector.
    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for Sample {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}
