#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Budget-constrained selection of scored ATM sites.
//!
//! Given scored, priced candidate locations and a budget, picks the subset
//! to fund. [`optimize`] is the value-density greedy baseline the rest of
//! the system is built against; [`optimize_exact`] is a 0/1 knapsack DP over
//! a discretized budget that is never worse on total value. Both are pure
//! functions of their inputs with deterministic output ordering.

mod exact;
mod greedy;

pub use exact::optimize_exact;
pub use greedy::optimize;
pub use locacash_portfolio_models::{
    AtmLocation, Coordinates, LocationMetrics, OptimizationResult,
};

use std::collections::BTreeSet;

use thiserror::Error;

/// Errors raised by optimizer input validation.
///
/// Always raised before any selection work; the failing location is named.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortfolioError {
    /// The budget is negative or not finite. A zero budget is valid and
    /// yields the empty portfolio.
    #[error("budget must be a non-negative finite amount, got {value}")]
    InvalidBudget {
        /// The offending budget value.
        value: f64,
    },

    /// A location's land rate is zero, negative, or not finite, so its
    /// value density is undefined.
    #[error("location {id}: land rate must be a positive finite amount, got {value}")]
    InvalidLandRate {
        /// Identifier of the offending location.
        id: String,
        /// The offending land rate.
        value: f64,
    },

    /// A location's coordinates are out of range or not finite.
    #[error("location {id}: {message}")]
    InvalidCoordinates {
        /// Identifier of the offending location.
        id: String,
        /// What was wrong with the coordinates.
        message: String,
    },

    /// Two locations share an id. Ids are the final ordering tie-break, so
    /// duplicates would make the selection order ambiguous.
    #[error("duplicate location id {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

/// The greedy ranking key: viability score per unit of cost.
pub(crate) fn efficiency(location: &AtmLocation) -> f64 {
    f64::from(location.metrics.score) / location.metrics.land_rate
}

pub(crate) fn validate(locations: &[AtmLocation], budget: f64) -> Result<(), PortfolioError> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(PortfolioError::InvalidBudget { value: budget });
    }

    let mut seen = BTreeSet::new();
    for location in locations {
        if !seen.insert(location.id.as_str()) {
            return Err(PortfolioError::DuplicateId {
                id: location.id.clone(),
            });
        }

        let rate = location.metrics.land_rate;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(PortfolioError::InvalidLandRate {
                id: location.id.clone(),
                value: rate,
            });
        }

        let Coordinates { lat, lng } = location.location;
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(PortfolioError::InvalidCoordinates {
                id: location.id.clone(),
                message: format!("latitude must be within [-90, 90], got {lat}"),
            });
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(PortfolioError::InvalidCoordinates {
                id: location.id.clone(),
                message: format!("longitude must be within [-180, 180], got {lng}"),
            });
        }
    }

    Ok(())
}

/// Candidates ranked by efficiency descending, then score descending, then
/// id ascending. The shared deterministic ordering for both solvers.
pub(crate) fn ranked(locations: &[AtmLocation]) -> Vec<&AtmLocation> {
    let mut candidates: Vec<&AtmLocation> = locations.iter().collect();
    candidates.sort_by(|a, b| {
        efficiency(b)
            .total_cmp(&efficiency(a))
            .then_with(|| b.metrics.score.cmp(&a.metrics.score))
            .then_with(|| a.id.cmp(&b.id))
    });
    candidates
}


#[cfg(test)]
mod tests {
    use super::test_support::candidate;
    use super::*;

    #[test]
    fn rejects_negative_budget() {
        let err = validate(&[], -1.0).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidBudget { .. }));
    }

    #[test]
    fn rejects_nan_budget() {
        assert!(validate(&[], f64::NAN).is_err());
    }

    #[test]
    fn rejects_zero_land_rate() {
        let locations = vec![candidate("a", 80, 0.0)];
        let err = validate(&locations, 1000.0).unwrap_err();
        assert_eq!(
            err,
            PortfolioError::InvalidLandRate {
                id: "a".to_string(),
                value: 0.0,
            }
        );
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let mut location = candidate("a", 80, 1000.0);
        location.location.lat = 91.0;
        let err = validate(&[location], 1000.0).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidCoordinates { .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let locations = vec![candidate("a", 80, 1000.0), candidate("a", 70, 2000.0)];
        let err = validate(&locations, 5000.0).unwrap_err();
        assert_eq!(
            err,
            PortfolioError::DuplicateId {
                id: "a".to_string(),
            }
        );
    }

    #[test]
    fn ranking_breaks_efficiency_ties_by_score_then_id() {
        // b and c have identical efficiency (0.002); the higher score wins.
        // a and b have identical efficiency and score; the lower id wins.
        let locations = vec![
            candidate("b", 40, 20_000.0),
            candidate("c", 80, 40_000.0),
            candidate("a", 40, 20_000.0),
        ];
        let order: Vec<&str> = ranked(&locations).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }
}
