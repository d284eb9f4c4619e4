//! Log-likelihood-ratio significance scoring.
//!
//! Scores 2x2 contingency tables with Dunning's G² statistic and its signed
//! square root, and ranks the items of a sample distribution by how far their
//! frequency departs from a reference distribution. Everything here is pure
//! and safe to call from many threads at once.
//!
//! ```
//! use std::collections::HashMap;
//! use surprisal::significance::{compare_frequencies, log_likelihood_ratio};
//!
//! let llr = log_likelihood_ratio(10, 0, 0, 10).unwrap();
//! assert!((llr - 27.72589).abs() < 1e-5);
//!
//! let sample: HashMap<&str, u32> = [("rust", 30), ("the", 70)].into_iter().collect();
//! let corpus: HashMap<&str, u32> = [("rust", 10), ("the", 990)].into_iter().collect();
//! let ranked = compare_frequencies(&sample, &corpus, 10, 0.0).unwrap();
//! assert_eq!(ranked[0].item, "rust");
//! ```

mod distribution;
mod llr;
mod ranking;

pub use distribution::{Count, FrequencyDistribution};
pub use llr::{entropy, log_likelihood_ratio, root_log_likelihood_ratio, ContingencyTable};
pub use ranking::{compare_frequencies, ScoredItem};
