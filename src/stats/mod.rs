//! Reversible running statistics.
//!
//! Accumulators track count, mean and sample variance incrementally using
//! Welford's update, and can also *remove* a previously added sample by
//! applying the closed-form inverse of that update. Two implementations share
//! the [`RunningStatistics`] interface:
//!
//! - [`FullRunningStats`]: `u64` count and `f64` state, the accurate choice.
//! - [`CompactRunningStats`]: `u32` count and `f32` state, for holding
//!   millions of per-key accumulators in memory at some cost in precision.
//!
//! Accumulators carry no internal synchronization. Mutation takes `&mut self`,
//! so sharing one across threads requires the caller to serialize access.

mod compact;
mod full;

pub use compact::CompactRunningStats;
pub use full::FullRunningStats;

use std::fmt;

use crate::core::config::Precision;
use crate::core::errors::Result;

/// Shared interface of the running mean / standard deviation accumulators.
pub trait RunningStatistics: fmt::Debug {
    /// Incorporate one sample.
    fn add(&mut self, value: f64);

    /// Remove one previously added sample.
    ///
    /// `value` must be a sample that was actually added; removing anything
    /// else silently yields meaningless statistics. Removing from an empty
    /// accumulator fails with a precondition violation and leaves it
    /// untouched.
    fn remove(&mut self, value: f64) -> Result<()>;

    /// Number of samples currently held.
    fn count(&self) -> u64;

    /// Current mean, `NaN` when empty.
    fn average(&self) -> f64;

    /// Bessel-corrected sample variance, `NaN` with fewer than two samples.
    fn variance(&self) -> f64;

    /// Sample standard deviation, `NaN` with fewer than two samples.
    fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Whether no samples are held.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Replace one previously added sample with another.
    fn replace(&mut self, old: f64, new: f64) -> Result<()> {
        self.remove(old)?;
        self.add(new);
        Ok(())
    }

    /// Read-only view reporting the negated average.
    fn inverted(&self) -> Inverted<'_, Self>
    where
        Self: Sized,
    {
        Inverted { inner: self }
    }
}

/// Read-only view over an accumulator of `x` that reports statistics of `-x`.
#[derive(Debug, Clone, Copy)]
pub struct Inverted<'a, R: ?Sized> {
    inner: &'a R,
}

impl<'a, R: RunningStatistics + ?Sized> Inverted<'a, R> {
    /// Wrap an accumulator.
    pub fn new(inner: &'a R) -> Self {
        Self { inner }
    }

    /// Number of samples in the wrapped accumulator.
    pub fn count(&self) -> u64 {
        self.inner.count()
    }

    /// Negated mean of the wrapped accumulator.
    pub fn average(&self) -> f64 {
        -self.inner.average()
    }

    /// Variance is unchanged by negation.
    pub fn variance(&self) -> f64 {
        self.inner.variance()
    }

    /// Standard deviation is unchanged by negation.
    pub fn standard_deviation(&self) -> f64 {
        self.inner.standard_deviation()
    }
}

/// Boxed accumulator, as handed out by [`new_accumulator`].
pub type BoxedRunningStatistics = Box<dyn RunningStatistics + Send + Sync>;

/// Create an empty accumulator of the requested precision.
pub fn new_accumulator(precision: Precision) -> BoxedRunningStatistics {
    match precision {
        Precision::Full => Box::new(FullRunningStats::new()),
        Precision::Compact => Box::new(CompactRunningStats::new()),
    }
}

/// Variance from a count and sum of squared deviations.
///
/// Rounding can leave the sum a hair below zero after removals; that is
/// reported as zero variance.
fn sample_variance(count: u64, sum_squared_deviations: f64) -> f64 {
    if count < 2 {
        f64::NAN
    } else {
        sum_squared_deviations.max(0.0) / (count - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_accumulators_are_send_and_sync() {
        assert_send_sync::<FullRunningStats>();
        assert_send_sync::<CompactRunningStats>();
        assert_send_sync::<BoxedRunningStatistics>();
    }

    #[test]
    fn test_new_accumulator_is_empty() {
        for precision in [Precision::Full, Precision::Compact] {
            let stats = new_accumulator(precision);
            assert!(stats.is_empty());
            assert!(stats.average().is_nan());
            assert!(stats.standard_deviation().is_nan());
        }
    }

    #[test]
    fn test_boxed_accumulator_tracks_samples() {
        let mut stats = new_accumulator(Precision::Compact);
        stats.add(2.0);
        stats.add(4.0);
        assert_eq!(stats.count(), 2);
        assert!((stats.average() - 3.0).abs() < 1e-6);
        assert!((stats.variance() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_replace() {
        let mut stats = FullRunningStats::new();
        stats.add(1.0);
        stats.add(3.0);
        stats.replace(3.0, 5.0).unwrap();
        assert_eq!(stats.count(), 2);
        assert!((stats.average() - 3.0).abs() < 1e-12);
        assert!((stats.variance() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_replace_on_empty_fails_without_adding() {
        let mut stats = FullRunningStats::new();
        assert!(stats.replace(1.0, 2.0).is_err());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_inverted_view() {
        let mut stats = FullRunningStats::new();
        stats.add(2.0);
        stats.add(6.0);

        let inverted = stats.inverted();
        assert_eq!(inverted.count(), 2);
        assert_eq!(inverted.average(), -4.0);
        assert_eq!(inverted.standard_deviation(), stats.standard_deviation());
    }

    #[test]
    fn test_inverted_view_over_trait_object() {
        let mut stats = new_accumulator(Precision::Full);
        stats.add(5.0);
        let inverted = Inverted::new(&*stats);
        assert_eq!(inverted.average(), -5.0);
        assert!(inverted.variance().is_nan());
    }

    #[test]
    fn test_sample_variance_clamps_negative_drift() {
        assert_eq!(sample_variance(3, -1e-12), 0.0);
        assert!(sample_variance(1, 4.0).is_nan());
        assert_eq!(sample_variance(3, 4.0), 2.0);
    }
}
