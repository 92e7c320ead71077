//! Summary statistics over a sample.
//!
//! [`summarize`] reduces a slice to a [`Statistics`] 5-tuple:
//! count, mean, sample standard deviation, min and max.
//!
//! # Algorithms
//!
//! - **Mean, min, max**: one accumulation pass; extrema by pairwise
//!   comparison starting from +∞ / −∞.
//! - **Standard deviation**: two-pass. The sum of squared deviations from
//!   the mean is divided by `n − 1` (Bessel's correction). Subtracting the
//!   already known mean avoids the cancellation of the `E[X²] − E[X]²` form.

use std::fmt;

/// Five-number summary of a sample.
///
/// Column order, as returned by [`to_array`](Self::to_array), is
/// `n, mean, stddev, min, max`.
///
/// # Invariants
///
/// - `count` equals the length of the summarised sample.
/// - An empty sample gives all zeros.
/// - A single-value sample has a standard deviation of `0.0`.
///
/// # Examples
///
/// ```rust
/// use randstat_core::stats::summarize;
///
/// let s = summarize(&[0.2, 0.4, 0.6]);
/// assert_eq!(s.count(), 3.0);
/// assert!((s.mean() - 0.4).abs() < 1e-12);
/// assert!((s.std_dev() - 0.2).abs() < 1e-12);
/// assert_eq!(s.min(), 0.2);
/// assert_eq!(s.max(), 0.6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    count: f64,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

impl Statistics {
    /// Column labels matching [`to_array`](Self::to_array).
    pub const LABELS: [&'static str; 5] = ["n", "mean", "stddev", "min", "max"];

    /// Number of values, as a float.
    #[inline]
    pub fn count(&self) -> f64 {
        self.count
    }

    /// Arithmetic mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation (`n − 1` denominator).
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Smallest value.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the statistics in column order.
    #[inline]
    pub fn to_array(&self) -> [f64; 5] {
        [self.count, self.mean, self.std_dev, self.min, self.max]
    }
}

impl From<[f64; 5]> for Statistics {
    /// Builds statistics from column-order values, e.g. for rendering
    /// figures computed elsewhere.
    fn from([count, mean, std_dev, min, max]: [f64; 5]) -> Self {
        Self {
            count,
            mean,
            std_dev,
            min,
            max,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={:.0} mean={:.4} stddev={:.4} min={:.4} max={:.4}",
            self.count, self.mean, self.std_dev, self.min, self.max
        )
    }
}

/// Computes count, mean, sample standard deviation, min and max.
///
/// Total over all inputs: an empty slice yields all zeros and a single
/// value `x` yields `(1, x, 0, x, x)`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn summarize(values: &[f64]) -> Statistics {
    if values.is_empty() {
        return Statistics::default();
    }
    let n = values.len() as f64;

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &x in values {
        sum += x;
        min = min.min(x);
        max = max.max(x);
    }
    let mean = sum / n;

    // Undefined for a single point; report zero.
    let mut std_dev = 0.0;
    if values.len() > 1 {
        let squared_deviations: f64 = values.iter().map(|&x| (x - mean) * (x - mean)).sum();
        std_dev = (squared_deviations / (n - 1.0)).sqrt();
    }

    Statistics {
        count: n,
        mean,
        std_dev,
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_is_all_zero() {
        let s = summarize(&[]);
        assert_eq!(s.to_array(), [0.0; 5]);
        assert_eq!(s, Statistics::default());
    }

    #[test]
    fn test_single_value() {
        let s = summarize(&[0.73]);
        assert_eq!(s.to_array(), [1.0, 0.73, 0.0, 0.73, 0.73]);
    }

    #[test]
    fn test_three_values() {
        let s = summarize(&[0.2, 0.4, 0.6]);
        assert_eq!(s.count(), 3.0);
        assert_relative_eq!(s.mean(), 0.4, epsilon = 1e-12);
        assert_relative_eq!(s.std_dev(), 0.2, epsilon = 1e-12);
        assert_eq!(s.min(), 0.2);
        assert_eq!(s.max(), 0.6);
    }

    #[test]
    fn test_order_does_not_matter_for_extrema() {
        let s = summarize(&[0.9, 0.1, 0.5, 0.3]);
        assert_eq!(s.min(), 0.1);
        assert_eq!(s.max(), 0.9);
        assert_relative_eq!(s.mean(), 0.45, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_sample_has_zero_std_dev() {
        let s = summarize(&[0.25; 50]);
        assert_eq!(s.std_dev(), 0.0);
        assert_eq!(s.mean(), 0.25);
    }

    #[test]
    fn test_known_sample_variance() {
        // Sample variance 32/7
        let s = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_relative_eq!(s.mean(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(s.std_dev(), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_large_offset_is_stable() {
        let values: Vec<f64> = [4.0, 7.0, 13.0, 16.0].iter().map(|x| x + 1e9).collect();
        let s = summarize(&values);
        assert_relative_eq!(s.std_dev(), 30.0_f64.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_array_round_trip() {
        let s = Statistics::from([10.0, 0.5, 0.2887, 0.0, 1.0]);
        assert_eq!(s.count(), 10.0);
        assert_eq!(s.std_dev(), 0.2887);
        assert_eq!(s.to_array(), [10.0, 0.5, 0.2887, 0.0, 1.0]);
    }

    #[test]
    fn test_display() {
        let s = summarize(&[0.2, 0.4, 0.6]);
        assert_eq!(
            s.to_string(),
            "n=3 mean=0.4000 stddev=0.2000 min=0.2000 max=0.6000"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let s = summarize(&[0.2, 0.4, 0.6]);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"std_dev\""));

        let back: Statistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_count_matches_length(values in prop::collection::vec(0.0..1.0f64, 0..500)) {
                let s = summarize(&values);
                prop_assert_eq!(s.count(), values.len() as f64);
            }

            #[test]
            fn prop_mean_within_extrema(values in prop::collection::vec(0.0..1.0f64, 1..500)) {
                let s = summarize(&values);
                prop_assert!(s.min() <= s.mean() + 1e-12);
                prop_assert!(s.mean() <= s.max() + 1e-12);
                prop_assert!(s.std_dev() >= 0.0);
            }
        }
    }
}
