#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Data contract for ATM site viability scoring.
//!
//! These types form the snake_case JSON boundary between the scoring engine
//! and its callers (data acquisition upstream, analysis history and report
//! generation downstream). Field names are fixed — other tools in the
//! pipeline address factors by these exact keys.

use serde::{Deserialize, Serialize};

/// The six measurable factors that drive a site's viability score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FactorKind {
    /// Residents per unit area around the candidate site.
    PopulationDensity,
    /// Existing ATMs within the survey radius.
    CompetingAtms,
    /// Commercial establishments within the survey radius.
    CommercialActivity,
    /// Road traffic volume near the site.
    TrafficFlow,
    /// Public transport stops within the survey radius.
    PublicTransport,
    /// Monetary cost of establishing an ATM at the site.
    LandRate,
}

/// Raw measured attributes for one candidate site.
///
/// Produced by the external data-acquisition step and treated as immutable
/// once fetched. Counts are non-negative; `land_rate` must be positive.
/// Validation happens in the scoring crate, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFactors {
    /// Residents per unit area (>= 0).
    pub population_density: f64,
    /// Number of competing ATMs within the survey radius.
    pub competing_atms: u32,
    /// Commercial establishment count or index (>= 0).
    pub commercial_activity: f64,
    /// Traffic volume measure (>= 0).
    pub traffic_flow: f64,
    /// Public transport stop count or index (>= 0).
    pub public_transport: f64,
    /// Site cost in plain monetary units (> 0).
    pub land_rate: f64,
}

/// User-assigned importance per factor, each in [0, 100].
///
/// Weights are relative — they are normalized by their sum, so they need not
/// add up to 100. The defaults mirror the weights the analysis UI starts
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Weight for population density.
    pub population_density: f64,
    /// Weight for competing ATMs.
    pub competing_atms: f64,
    /// Weight for commercial activity.
    pub commercial_activity: f64,
    /// Weight for traffic flow.
    pub traffic_flow: f64,
    /// Weight for public transport.
    pub public_transport: f64,
    /// Weight for land rate.
    pub land_rate: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            population_density: 25.0,
            competing_atms: 20.0,
            commercial_activity: 20.0,
            traffic_flow: 15.0,
            public_transport: 10.0,
            land_rate: 10.0,
        }
    }
}

impl FactorWeights {
    /// Returns the weight assigned to `kind`.
    #[must_use]
    pub const fn get(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::PopulationDensity => self.population_density,
            FactorKind::CompetingAtms => self.competing_atms,
            FactorKind::CommercialActivity => self.commercial_activity,
            FactorKind::TrafficFlow => self.traffic_flow,
            FactorKind::PublicTransport => self.public_transport,
            FactorKind::LandRate => self.land_rate,
        }
    }

    /// Sum of all six weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.population_density
            + self.competing_atms
            + self.commercial_activity
            + self.traffic_flow
            + self.public_transport
            + self.land_rate
    }
}

/// Qualitative band for a sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    /// Sub-score below the medium threshold.
    Low,
    /// Sub-score in the middle band.
    Medium,
    /// Sub-score at or above the high threshold.
    High,
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// A single factor's normalized result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    /// Normalized sub-score, 0-100, rounded to the nearest integer.
    pub score: u8,
    /// Qualitative band for the sub-score.
    pub rating: Rating,
}

/// All six per-factor results, keyed by the fixed factor field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScores {
    /// Population density sub-score.
    pub population_density: FactorScore,
    /// Competing ATMs sub-score.
    pub competing_atms: FactorScore,
    /// Commercial activity sub-score.
    pub commercial_activity: FactorScore,
    /// Traffic flow sub-score.
    pub traffic_flow: FactorScore,
    /// Public transport sub-score.
    pub public_transport: FactorScore,
    /// Land rate sub-score.
    pub land_rate: FactorScore,
}

impl FactorScores {
    /// Returns the result for `kind`.
    #[must_use]
    pub const fn get(&self, kind: FactorKind) -> FactorScore {
        match kind {
            FactorKind::PopulationDensity => self.population_density,
            FactorKind::CompetingAtms => self.competing_atms,
            FactorKind::CommercialActivity => self.commercial_activity,
            FactorKind::TrafficFlow => self.traffic_flow,
            FactorKind::PublicTransport => self.public_transport,
            FactorKind::LandRate => self.land_rate,
        }
    }
}

/// The complete scoring response for one candidate site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted overall viability score, 0-100, rounded to the nearest
    /// integer.
    pub overall_score: u8,
    /// One-sentence suitability summary derived from the overall score.
    pub suitability: String,
    /// Per-factor normalized results.
    pub factor_scores: FactorScores,
    /// Ordered, deterministic recommendation sentences.
    pub recommendations: Vec<String>,
}

/// A scoring request as received at the service boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRequest {
    /// Raw factors for the candidate site.
    pub location_factors: LocationFactors,
    /// Factor weights; the UI defaults apply when omitted.
    #[serde(default)]
    pub weights: FactorWeights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_kind_displays_as_snake_case() {
        assert_eq!(FactorKind::PopulationDensity.to_string(), "population_density");
        assert_eq!(FactorKind::CompetingAtms.to_string(), "competing_atms");
        assert_eq!(FactorKind::LandRate.to_string(), "land_rate");
    }

    #[test]
    fn default_weights_match_ui_defaults() {
        let weights = FactorWeights::default();
        assert!((weights.sum() - 100.0).abs() < f64::EPSILON);
        assert!((weights.get(FactorKind::PopulationDensity) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rating_displays_capitalized() {
        assert_eq!(Rating::High.to_string(), "High");
        assert_eq!(Rating::Medium.to_string(), "Medium");
        assert_eq!(Rating::Low.to_string(), "Low");
    }

    #[test]
    fn score_result_serializes_with_fixed_snake_case_keys() {
        let result = ScoreResult {
            overall_score: 78,
            suitability: "This location is highly suitable for an ATM placement.".to_string(),
            factor_scores: FactorScores {
                population_density: FactorScore {
                    score: 99,
                    rating: Rating::High,
                },
                competing_atms: FactorScore {
                    score: 80,
                    rating: Rating::High,
                },
                commercial_activity: FactorScore {
                    score: 100,
                    rating: Rating::High,
                },
                traffic_flow: FactorScore {
                    score: 100,
                    rating: Rating::High,
                },
                public_transport: FactorScore {
                    score: 100,
                    rating: Rating::High,
                },
                land_rate: FactorScore {
                    score: 37,
                    rating: Rating::Low,
                },
            },
            recommendations: vec!["This location has excellent commercial activity nearby".to_string()],
        };

        let json = serde_json::to_value(&result).unwrap();
        // Downstream tools address factors by these exact keys.
        assert_eq!(json["factor_scores"]["population_density"]["score"], 99);
        assert_eq!(json["factor_scores"]["land_rate"]["rating"], "Low");
        assert_eq!(json["overall_score"], 78);
    }

    #[test]
    fn scoring_request_defaults_missing_weights() {
        let request: ScoringRequest = serde_json::from_str(
            r#"{
                "location_factors": {
                    "population_density": 20.9,
                    "competing_atms": 1,
                    "commercial_activity": 14.0,
                    "traffic_flow": 1233.0,
                    "public_transport": 33.0,
                    "land_rate": 69237.54
                }
            }"#,
        )
        .unwrap();
        assert_eq!(request.weights, FactorWeights::default());
        assert_eq!(request.location_factors.competing_atms, 1);
    }
}
