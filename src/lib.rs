//! # surprisal: statistics primitives for learning algorithms
//!
//! A small toolkit used underneath classifiers, recommenders and collocation
//! detectors. It provides:
//!
//! - **Running statistics**: count, mean and standard deviation maintained
//!   incrementally under both addition *and removal* of samples, in a full
//!   precision and a compact variant
//! - **Significance scoring**: entropy, the 2x2 log-likelihood ratio (G²), its
//!   signed square root, and ranking of items by how surprising their frequency
//!   in a sample is against a reference distribution
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │   stats                  │   significance            │
//! │ • RunningStatistics      │ • entropy / LLR / root    │
//! │ • FullRunningStats       │ • ContingencyTable        │
//! │ • CompactRunningStats    │ • compare_frequencies     │
//! ├──────────────────────────────────────────────────────┤
//! │   core: errors, config                               │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The two halves are independent of each other.
//!
//! ## Quick Start
//!
//! ```rust
//! use surprisal::stats::{FullRunningStats, RunningStatistics};
//! use surprisal::significance::root_log_likelihood_ratio;
//!
//! # fn main() -> surprisal::Result<()> {
//! let mut ratings = FullRunningStats::new();
//! ratings.add(4.0);
//! ratings.add(2.0);
//! ratings.remove(2.0)?;
//! assert_eq!(ratings.average(), 4.0);
//!
//! let score = root_log_likelihood_ratio(904, 21060, 1144, 283012)?;
//! assert!(score > 0.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

// Shared infrastructure
pub mod core {
    //! Error handling and configuration.

    pub mod config;
    pub mod errors;
}

pub mod significance;
pub mod stats;

// Re-export primary types for convenience
pub use crate::core::config::{Precision, SurprisalConfig};
pub use crate::core::errors::{Result, ResultExt, SurprisalError};
pub use significance::{compare_frequencies, ContingencyTable, ScoredItem};
pub use stats::{CompactRunningStats, FullRunningStats, RunningStatistics};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
