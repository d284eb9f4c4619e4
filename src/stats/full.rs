use tracing::warn;

use super::{sample_variance, RunningStatistics};
use crate::core::errors::{Result, SurprisalError};

/// Full-precision running mean and standard deviation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FullRunningStats {
    count: u64,
    mean: f64,
    sum_squared_deviations: f64,
}

impl FullRunningStats {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another accumulator's samples into this one.
    ///
    /// Uses the pairwise combination of Chan et al., so per-key accumulators
    /// built separately can be aggregated without replaying their samples.
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let total = n_a + n_b;
        let delta = other.mean - self.mean;

        self.mean += delta * n_b / total;
        self.sum_squared_deviations +=
            other.sum_squared_deviations + delta * delta * n_a * n_b / total;
        self.count += other.count;
    }
}

impl RunningStatistics for FullRunningStats {
    fn add(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.sum_squared_deviations += delta * (value - self.mean);
    }

    fn remove(&mut self, value: f64) -> Result<()> {
        if self.count == 0 {
            warn!(value, "rejected removal from empty accumulator");
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

        let n = self.count as f64;
        let old_mean = (self.mean * (n + 1.0) - value) / n;
        self.sum_squared_deviations -= (value - self.mean) * (value - old_mean);
        self.mean = old_mean;
        Ok(())
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    fn variance(&self) -> f64 {
        sample_variance(self.count, self.sum_squared_deviations)
    }
}

impl Extend<f64> for FullRunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for FullRunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
