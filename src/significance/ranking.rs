//! Ranking items by how surprising their sample frequency is.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::distribution::FrequencyDistribution;
use super::llr::ContingencyTable;
use crate::core::errors::{Result, SurprisalError};

/// An item paired with its significance score.
///
/// Ordering sorts by score descending; equal scores fall back to the item's
/// own ordering, ascending, so ranked output is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredItem<T> {
    /// The ranked item
    pub item: T,
    /// Signed root log-likelihood ratio
    pub score: f64,
}

impl<T> ScoredItem<T> {
    /// Pair an item with a score
    pub fn new(item: T, score: f64) -> Self {
        Self { item, score }
    }
}

impl<T: Ord> Ord for ScoredItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.item.cmp(&other.item))
    }
}

impl<T: Ord> PartialOrd for ScoredItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for ScoredItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for ScoredItem<T> {}

/// Rank items whose frequency in `sample` departs most from `reference`.
///
/// Every item with a non-zero count in `reference` is scored with the signed
/// root LLR of the table
///
/// ```text
/// [[sample[t],    total(sample)    - sample[t]   ],
///  [reference[t], total(reference) - reference[t]]]
/// ```
///
/// so over-represented items score positive and under-represented items score
/// negative. Items scoring below `min_score` are dropped; the rest are sorted
/// by descending score and truncated to `max_return`. Items present only in
/// `sample` are not scored but still count toward its total.
///
/// Fails with [`SurprisalError::InvalidArgument`] on a negative count in either
/// distribution, a NaN `min_score`, or totals that overflow `i64`.
pub fn compare_frequencies<T, S, R>(
    sample: &S,
    reference: &R,
    max_return: usize,
    min_score: f64,
) -> Result<Vec<ScoredItem<T>>>
where
    T: Clone + Ord,
    S: FrequencyDistribution<T> + ?Sized,
    R: FrequencyDistribution<T> + ?Sized,
{
    if min_score.is_nan() {
        return Err(SurprisalError::invalid_argument_named(
            "min_score must not be NaN",
            "min_score",
        ));
    }

    let total_sample = distribution_total::<T, S>(sample, "sample")?;
    let total_reference = distribution_total::<T, R>(reference, "reference")?;

    let mut candidates = 0usize;
    let mut scored = Vec::new();
    for (item, k21) in reference.counts() {
        if k21 == 0 {
            continue;
        }
        candidates += 1;

        let k11 = sample.count_of(item);
        let table = ContingencyTable::new(k11, total_sample - k11, k21, total_reference - k21)?;
        let score = table.root_log_likelihood_ratio();
        trace!(?table, score, "scored item");

        if score >= min_score {
            scored.push(ScoredItem::new(item.clone(), score));
        }
    }

    let passing = scored.len();
    if scored.len() > max_return {
        if max_return > 0 {
            scored.select_nth_unstable(max_return - 1);
        }
        scored.truncate(max_return);
    }
    scored.sort_unstable();

    debug!(
        candidates,
        passing,
        returned = scored.len(),
        "compared frequency distributions"
    );
    Ok(scored)
}

fn distribution_total<T, D>(distribution: &D, name: &str) -> Result<i64>
where
    D: FrequencyDistribution<T> + ?Sized,
{
    let mut total = 0i64;
    for (_, count) in distribution.counts() {
        if count < 0 {
            return Err(SurprisalError::invalid_argument_named(
                format!("counts must be non-negative, got {count}"),
                name,
            ));
        }
        total = total.checked_add(count).ok_or_else(|| {
            SurprisalError::invalid_argument_named("total count overflows i64", name)
        })?;
    }
    Ok(total)
}
