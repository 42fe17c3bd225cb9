//! Scoring policy configuration.
//!
//! The transfer curves and band thresholds are calibrated against the survey
//! data the acquisition step produces (densities per km², establishment and
//! stop counts in a 1.5 km radius, land rates in plain currency units). The
//! defaults reproduce the production calibration; every constant can be
//! overridden from a TOML file via [`ScoringConfig::from_toml_str`].

use serde::{Deserialize, Serialize};

/// A saturating logarithmic transfer curve: `base + slope * log10(value)`,
/// floored at `floor`, with a fixed score for non-positive inputs.
///
/// Used for factors with diminishing returns (population density, traffic
/// flow) and, with a negative slope, for cost factors (land rate).
/// Overriding a curve from TOML requires the whole table — partial curve
/// tables are rejected rather than silently zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogCurve {
    /// Score at `value == 1` (where log10 is zero).
    pub base: f64,
    /// Score change per decade of the input value.
    pub slope: f64,
    /// Lower bound applied after the curve.
    pub floor: f64,
    /// Score assigned when the input is zero or negative.
    pub zero_value_score: f64,
}

impl LogCurve {
    /// Applies the curve to a raw value. The result is not yet clamped to
    /// the 0-100 score range; the caller does that uniformly.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        if value > 0.0 {
            (self.base + self.slope * value.log10()).max(self.floor)
        } else {
            self.zero_value_score
        }
    }
}

/// A linear transfer curve: `base + slope * value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearCurve {
    /// Score at `value == 0`.
    pub base: f64,
    /// Score change per input unit.
    pub slope: f64,
}

impl LinearCurve {
    /// Applies the curve to a raw value (unclamped).
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        self.base + self.slope * value
    }
}

/// Sub-score thresholds for the High/Medium/Low rating bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingBands {
    /// Sub-scores at or above this are rated High.
    pub high: f64,
    /// Sub-scores at or above this (and below `high`) are rated Medium.
    pub medium: f64,
}

impl Default for RatingBands {
    fn default() -> Self {
        Self {
            high: 80.0,
            medium: 60.0,
        }
    }
}

/// Overall-score thresholds for the suitability sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuitabilityBands {
    /// Overall scores at or above this are "highly suitable".
    pub highly: u8,
    /// Overall scores at or above this (and below `highly`) are
    /// "moderately suitable".
    pub moderately: u8,
}

impl Default for SuitabilityBands {
    fn default() -> Self {
        Self {
            highly: 75,
            moderately: 60,
        }
    }
}

/// The complete scoring policy: one transfer curve per factor plus the
/// rating and suitability thresholds.
///
/// Every sub-score is clamped to [0, 100] after its curve is applied, so the
/// weighted overall score is guaranteed to stay in [0, 100] no matter how
/// the curves are tuned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Population density curve (log, saturating).
    pub population_density: LogCurve,
    /// Penalty subtracted from 100 per competing ATM; floored at 0.
    pub penalty_per_competitor: f64,
    /// Commercial activity curve (linear, saturating).
    pub commercial_activity: LinearCurve,
    /// Traffic flow curve (log, saturating).
    pub traffic_flow: LogCurve,
    /// Public transport curve (linear, saturating).
    pub public_transport: LinearCurve,
    /// Land rate curve (log, decreasing — higher cost scores lower).
    pub land_rate: LogCurve,
    /// High/Medium/Low rating thresholds.
    pub rating: RatingBands,
    /// Suitability sentence thresholds.
    pub suitability: SuitabilityBands,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            // Scores 80+ once density clears ~15 per km².
            population_density: LogCurve {
                base: 40.0,
                slope: 45.0,
                floor: 0.0,
                zero_value_score: 10.0,
            },
            penalty_per_competitor: 20.0,
            // Scores 80+ beyond ~10 nearby establishments.
            commercial_activity: LinearCurve {
                base: 40.0,
                slope: 5.0,
            },
            // Calibrated for typical urban counts (100-2000 road segments).
            traffic_flow: LogCurve {
                base: 30.0,
                slope: 35.0,
                floor: 0.0,
                zero_value_score: 10.0,
            },
            public_transport: LinearCurve {
                base: 40.0,
                slope: 5.0,
            },
            // Calibrated for urban land rates in the 30k-150k range.
            land_rate: LogCurve {
                base: 110.0,
                slope: -15.0,
                floor: 30.0,
                zero_value_score: 90.0,
            },
            rating: RatingBands::default(),
            suitability: SuitabilityBands::default(),
        }
    }
}

impl ScoringConfig {
    /// Parses a (possibly partial) config override from TOML. Missing keys
    /// keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a key has the wrong
    /// type.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_curve_saturates_at_floor() {
        let curve = LogCurve {
            base: 110.0,
            slope: -15.0,
            floor: 30.0,
            zero_value_score: 90.0,
        };
        // 10^6 would give 110 - 90 = 20 without the floor.
        assert!((curve.apply(1_000_000.0) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn log_curve_uses_zero_value_score() {
        let curve = ScoringConfig::default().population_density;
        assert!((curve.apply(0.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn linear_curve_is_affine() {
        let curve = LinearCurve {
            base: 40.0,
            slope: 5.0,
        };
        assert!((curve.apply(10.0) - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_toml_override_keeps_defaults() {
        let config = ScoringConfig::from_toml_str(
            "penalty_per_competitor = 10.0\n\n[rating]\nhigh = 85.0\n",
        )
        .unwrap();
        assert!((config.penalty_per_competitor - 10.0).abs() < f64::EPSILON);
        assert!((config.rating.high - 85.0).abs() < f64::EPSILON);
        // Untouched keys keep their defaults.
        assert!((config.rating.medium - 60.0).abs() < f64::EPSILON);
        assert_eq!(config.suitability.highly, 75);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ScoringConfig::from_toml_str("penalty_per_competitor = \"ten\"").is_err());
    }
}
