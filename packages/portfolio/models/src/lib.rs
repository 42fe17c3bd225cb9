#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Data contract for budget-constrained ATM portfolio selection.
//!
//! These types form the camelCase JSON boundary shared with the analysis
//! history and the report generator, which address fields by these exact
//! keys (`landRate`, `competingATMs`, `selectedLocations`, ...).

use serde::{Deserialize, Serialize};

/// A geographic point. Latitude in [-90, 90], longitude in [-180, 180],
/// both finite; validated by the optimizer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// Scored metrics for a saved analysis, as read back from the history.
///
/// `score` and `land_rate` drive the optimizer; the remaining raw factor
/// values are retained for display in reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMetrics {
    /// Overall viability score, 0-100.
    pub score: u8,
    /// Site cost in plain monetary units — the optimizer's budget price.
    pub land_rate: f64,
    /// Residents per unit area around the site.
    pub population_density: f64,
    /// Competing ATMs within the survey radius.
    #[serde(rename = "competingATMs")]
    pub competing_atms: u32,
    /// Commercial establishment count or index.
    pub commercial_activity: f64,
    /// Traffic volume measure.
    pub traffic_flow: f64,
    /// Public transport stop count or index.
    pub public_transport: f64,
}

/// One candidate site in an optimization request, and one selected site in
/// the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmLocation {
    /// Opaque stable identifier, unique within one request.
    pub id: String,
    /// Site coordinates.
    pub location: Coordinates,
    /// Scored metrics.
    pub metrics: LocationMetrics,
    /// Set by the optimizer on output; ignored on input.
    #[serde(default)]
    pub is_selected: bool,
}

/// The funded portfolio for one budget.
///
/// `used_budget` never exceeds the requested budget; `total_value` is the
/// greedy (or DP, for the exact solver) total, not a claimed global optimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Selected sites in acceptance order, each with `is_selected = true`.
    pub selected_locations: Vec<AtmLocation>,
    /// Sum of the selected sites' viability scores.
    pub total_value: u32,
    /// Sum of the selected sites' land rates.
    pub used_budget: f64,
}

impl OptimizationResult {
    /// The well-formed empty portfolio (no candidates fit, or none given).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            selected_locations: Vec::new(),
            total_value: 0,
            used_budget: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_zero_totals() {
        let result = OptimizationResult::empty();
        assert!(result.selected_locations.is_empty());
        assert_eq!(result.total_value, 0);
        assert!(result.used_budget.abs() < f64::EPSILON);
    }

    #[test]
    fn location_round_trips_through_client_keys() {
        let json = r#"{
            "id": "analysis-42",
            "location": { "lat": 9.9312, "lng": 76.2673 },
            "metrics": {
                "score": 78,
                "landRate": 69237.54,
                "populationDensity": 20.9,
                "competingATMs": 1,
                "commercialActivity": 14.0,
                "trafficFlow": 1233.0,
                "publicTransport": 33.0
            }
        }"#;

        let location: AtmLocation = serde_json::from_str(json).unwrap();
        assert_eq!(location.id, "analysis-42");
        assert_eq!(location.metrics.competing_atms, 1);
        // `is_selected` is an output field; absent on input means false.
        assert!(!location.is_selected);

        let value = serde_json::to_value(&location).unwrap();
        assert!(value["metrics"].get("landRate").is_some());
        assert!(value["metrics"].get("competingATMs").is_some());
        assert!(value.get("isSelected").is_some());
    }

    #[test]
    fn result_serializes_with_client_keys() {
        let value = serde_json::to_value(OptimizationResult::empty()).unwrap();
        assert!(value.get("selectedLocations").is_some());
        assert!(value.get("totalValue").is_some());
        assert!(value.get("usedBudget").is_some());
    }
}
