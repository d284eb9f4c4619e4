//! Entropy and log-likelihood ratio over 2x2 contingency tables.
//!
//! These follow Dunning's formulation, computing the G² statistic through
//! unnormalized entropies:
//!
//! ```text
//! LLR = 2 · (H(row sums) + H(column sums) − H(cells))
//! H(k₁..kₙ) = N ln N − Σ kᵢ ln kᵢ,   N = Σ kᵢ
//! ```

use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::core::errors::{Result, SurprisalError};

/// Unnormalized Shannon entropy of a set of counts.
///
/// Returns `N ln N − Σ kᵢ ln kᵢ` with `0 ln 0 = 0`. Fails with
/// [`SurprisalError::InvalidArgument`] if any count is negative.
pub fn entropy(counts: &[i64]) -> Result<f64> {
    for (index, &count) in counts.iter().enumerate() {
        check_count(count, || format!("counts[{index}]"))?;
    }
    checked_total(counts)?;
    Ok(entropy_of_valid(counts))
}

/// Log-likelihood ratio (G²) of the table `[[k11, k12], [k21, k22]]`.
///
/// Zero when rows and columns look independent, growing with the strength of
/// association. Never negative.
pub fn log_likelihood_ratio(k11: i64, k12: i64, k21: i64, k22: i64) -> Result<f64> {
    Ok(ContingencyTable::new(k11, k12, k21, k22)?.log_likelihood_ratio())
}

/// Signed square root of [`log_likelihood_ratio`].
///
/// Positive when `k11` is over-represented, i.e. `k11 / (k11 + k12)` is at
/// least `k21 / (k21 + k22)`, negative when it is under-represented.
pub fn root_log_likelihood_ratio(k11: i64, k12: i64, k21: i64, k22: i64) -> Result<f64> {
    Ok(ContingencyTable::new(k11, k12, k21, k22)?.root_log_likelihood_ratio())
}

/// A 2x2 table of non-negative co-occurrence counts.
///
/// Rows are feature present/absent, columns are class present/absent. The
/// constructor rejects negative cells and totals that overflow `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ContingencyTable {
    k11: i64,
    k12: i64,
    k21: i64,
    k22: i64,
}

impl ContingencyTable {
    /// Build a table, validating every cell
    pub fn new(k11: i64, k12: i64, k21: i64, k22: i64) -> Result<Self> {
        check_count(k11, || "k11".to_string())?;
        check_count(k12, || "k12".to_string())?;
        check_count(k21, || "k21".to_string())?;
        check_count(k22, || "k22".to_string())?;
        checked_total(&[k11, k12, k21, k22])?;
        Ok(Self { k11, k12, k21, k22 })
    }

    /// Cells in row-major order
    pub fn cells(&self) -> [i64; 4] {
        [self.k11, self.k12, self.k21, self.k22]
    }

    /// Sum of all cells
    pub fn total(&self) -> i64 {
        self.k11 + self.k12 + self.k21 + self.k22
    }

    /// Row sums: feature present, feature absent
    pub fn row_sums(&self) -> [i64; 2] {
        [self.k11 + self.k12, self.k21 + self.k22]
    }

    /// Column sums: class present, class absent
    pub fn column_sums(&self) -> [i64; 2] {
        [self.k11 + self.k21, self.k12 + self.k22]
    }

    /// G² statistic for this table
    pub fn log_likelihood_ratio(&self) -> f64 {
        let row_entropy = entropy_of_valid(&self.row_sums());
        let column_entropy = entropy_of_valid(&self.column_sums());
        let matrix_entropy = entropy_of_valid(&self.cells());

        // Rounding can push a true zero slightly negative
        let llr = 2.0 * (row_entropy + column_entropy - matrix_entropy);
        llr.max(0.0)
    }

    /// Signed square root of the G² statistic
    pub fn root_log_likelihood_ratio(&self) -> f64 {
        let root = self.log_likelihood_ratio().sqrt();
        if root == 0.0 {
            return 0.0;
        }

        let observed = proportion(self.k11, self.k12);
        let background = proportion(self.k21, self.k22);
        if observed < background {
            -root
        } else {
            root
        }
    }

    /// Probability of a G² at least this large under independence.
    ///
    /// G² is asymptotically χ² distributed with one degree of freedom.
    pub fn p_value(&self) -> Result<f64> {
        let chi_squared = ChiSquared::new(1.0)?;
        Ok(chi_squared.sf(self.log_likelihood_ratio()))
    }
}

fn check_count(count: i64, argument: impl FnOnce() -> String) -> Result<()> {
    if count < 0 {
        return Err(SurprisalError::invalid_argument_named(
            format!("counts must be non-negative, got {count}"),
            argument(),
        ));
    }
    Ok(())
}

fn checked_total(counts: &[i64]) -> Result<i64> {
    counts
        .iter()
        .try_fold(0i64, |acc, &count| acc.checked_add(count))
        .ok_or_else(|| SurprisalError::invalid_argument("sum of counts overflows i64"))
}

fn entropy_of_valid(counts: &[i64]) -> f64 {
    let mut sum = 0i64;
    let mut result = 0.0;
    for &count in counts {
        result += x_log_x(count);
        sum += count;
    }
    x_log_x(sum) - result
}

fn x_log_x(x: i64) -> f64 {
    if x == 0 {
        0.0
    } else {
        let x = x as f64;
        x * x.ln()
    }
}

fn proportion(hits: i64, misses: i64) -> f64 {
    let total = hits + misses;
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}
