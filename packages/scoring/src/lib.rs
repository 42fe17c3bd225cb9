#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Viability scoring engine for candidate ATM sites.
//!
//! Maps raw location factors plus user weights to a [`ScoreResult`]: six
//! normalized 0-100 sub-scores, a weighted overall score, a suitability
//! sentence, and templated recommendations. Pure computation — no I/O, no
//! state across calls. The transfer curves and band thresholds live in
//! [`config::ScoringConfig`] so the scoring policy can be tuned without code
//! changes.

pub mod config;
mod recommend;
pub mod score;

pub use config::ScoringConfig;
pub use locacash_scoring_models::ScoreResult;
pub use score::score_location;

use locacash_scoring_models::FactorKind;
use thiserror::Error;

/// Errors raised by scoring input validation.
///
/// Always raised before any computation; the failing field is named so the
/// caller can surface it verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A raw factor value is outside its physically valid range.
    #[error("invalid factor {field}: {message}")]
    InvalidFactor {
        /// The factor that failed validation.
        field: FactorKind,
        /// What was wrong with the value.
        message: String,
    },

    /// A weight is outside [0, 100].
    #[error("weight {field} must be within [0, 100], got {value}")]
    InvalidWeight {
        /// The factor whose weight failed validation.
        field: FactorKind,
        /// The offending weight value.
        value: f64,
    },

    /// All six weights are zero, so no weighted average exists.
    #[error("at least one weight must be greater than zero")]
    ZeroWeightSum,
}
