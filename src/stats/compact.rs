use tracing::warn;

use super::{sample_variance, RunningStatistics};
use crate::core::errors::{Result, SurprisalError};

/// Reduced-footprint running mean and standard deviation.
///
/// State is stored as a `u32` count with `f32` mean and sum of squared
/// deviations, half the size of [`FullRunningStats`](super::FullRunningStats).
/// Updates are computed in `f64` and rounded on store, so error grows with
/// sample count roughly two orders of magnitude faster than the full variant.
/// Counts beyond `u32::MAX` are not supported.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompactRunningStats {
    count: u32,
    mean: f32,
    sum_squared_deviations: f32,
}

impl CompactRunningStats {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunningStatistics for CompactRunningStats {
    fn add(&mut self, value: f64) {
        self.count += 1;
        let mean = f64::from(self.mean);
        let delta = value - mean;
        let new_mean = mean + delta / f64::from(self.count);
        let ssd = f64::from(self.sum_squared_deviations) + delta * (value - new_mean);

        self.mean = new_mean as f32;
        self.sum_squared_deviations = ssd as f32;
    }

    fn remove(&mut self, value: f64) -> Result<()> {
        if self.count == 0 {
            warn!(value, "rejected removal from empty compact accumulator");
            return Err(SurprisalError::precondition(
                "remove",
                "cannot remove a sample from an empty accumulator",
            ));
        }

        self.count -= 1;
        if self.count == 0 {
            self.mean = 0.0;
            self.sum_squared_deviations = 0.0;
            return Ok(());
        }

        let n = f64::from(self.count);
        let mean = f64::from(self.mean);
        let old_mean = (mean * (n + 1.0) - value) / n;
        let ssd = f64::from(self.sum_squared_deviations) - (value - mean) * (value - old_mean);

        self.mean = old_mean as f32;
        self.sum_squared_deviations = ssd as f32;
        Ok(())
    }

    fn count(&self) -> u64 {
        u64::from(self.count)
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            f64::from(self.mean)
        }
    }

    fn variance(&self) -> f64 {
        sample_variance(self.count(), f64::from(self.sum_squared_deviations))
    }
}

impl Extend<f64> for CompactRunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for CompactRunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
