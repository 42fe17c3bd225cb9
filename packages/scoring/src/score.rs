//! Factor normalization and weighted aggregation.
//!
//! Each raw factor goes through its configured transfer curve, is clamped to
//! the 0-100 score range, and the overall score is the weight-normalized
//! average of the six sub-scores.

use locacash_scoring_models::{
    FactorKind, FactorScore, FactorScores, FactorWeights, LocationFactors, Rating, ScoreResult,
};
use strum::IntoEnumIterator as _;

use crate::ScoringError;
use crate::config::{RatingBands, ScoringConfig, SuitabilityBands};
use crate::recommend;

/// Scores one candidate site.
///
/// Pure function of its inputs: identical arguments always produce an
/// identical [`ScoreResult`].
///
/// # Errors
///
/// Returns [`ScoringError`] when a factor value is outside its physically
/// valid range, a weight falls outside [0, 100], or all weights are zero.
/// Validation runs before any computation.
pub fn score_location(
    factors: &LocationFactors,
    weights: &FactorWeights,
    config: &ScoringConfig,
) -> Result<ScoreResult, ScoringError> {
    validate_factors(factors)?;
    validate_weights(weights)?;

    let sub_scores = SubScores::compute(factors, config);

    let mut weighted_sum = 0.0;
    for kind in FactorKind::iter() {
        weighted_sum += sub_scores.get(kind) * weights.get(kind);
    }
    // Sub-scores are clamped to [0, 100], so the normalized average is too
    // and the rounded value always fits in a u8.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let overall_score = (weighted_sum / weights.sum()).round() as u8;

    log::debug!("scored location: overall={overall_score}");

    Ok(ScoreResult {
        overall_score,
        suitability: suitability_sentence(overall_score, &config.suitability),
        factor_scores: sub_scores.to_factor_scores(&config.rating),
        recommendations: recommend::generate(&sub_scores, factors, &config.rating),
    })
}

/// The six clamped sub-scores before rounding.
pub(crate) struct SubScores {
    pub population_density: f64,
    pub competing_atms: f64,
    pub commercial_activity: f64,
    pub traffic_flow: f64,
    pub public_transport: f64,
    pub land_rate: f64,
}

impl SubScores {
    fn compute(factors: &LocationFactors, config: &ScoringConfig) -> Self {
        let competition =
            100.0 - f64::from(factors.competing_atms) * config.penalty_per_competitor;

        Self {
            population_density: clamp_score(
                config.population_density.apply(factors.population_density),
            ),
            competing_atms: clamp_score(competition),
            commercial_activity: clamp_score(
                config.commercial_activity.apply(factors.commercial_activity),
            ),
            traffic_flow: clamp_score(config.traffic_flow.apply(factors.traffic_flow)),
            public_transport: clamp_score(
                config.public_transport.apply(factors.public_transport),
            ),
            land_rate: clamp_score(config.land_rate.apply(factors.land_rate)),
        }
    }

    pub(crate) const fn get(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::PopulationDensity => self.population_density,
            FactorKind::CompetingAtms => self.competing_atms,
            FactorKind::CommercialActivity => self.commercial_activity,
            FactorKind::TrafficFlow => self.traffic_flow,
            FactorKind::PublicTransport => self.public_transport,
            FactorKind::LandRate => self.land_rate,
        }
    }

    fn to_factor_scores(&self, bands: &RatingBands) -> FactorScores {
        // Sub-scores are clamped to [0, 100] before rounding.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let band = |score: f64| FactorScore {
            score: score.round() as u8,
            rating: rate(score, bands),
        };

        FactorScores {
            population_density: band(self.population_density),
            competing_atms: band(self.competing_atms),
            commercial_activity: band(self.commercial_activity),
            traffic_flow: band(self.traffic_flow),
            public_transport: band(self.public_transport),
            land_rate: band(self.land_rate),
        }
    }
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

fn rate(score: f64, bands: &RatingBands) -> Rating {
    if score >= bands.high {
        Rating::High
    } else if score >= bands.medium {
        Rating::Medium
    } else {
        Rating::Low
    }
}

fn suitability_sentence(overall_score: u8, bands: &SuitabilityBands) -> String {
    if overall_score >= bands.highly {
        "This location is highly suitable for an ATM placement.".to_string()
    } else if overall_score >= bands.moderately {
        "This location is moderately suitable for an ATM placement.".to_string()
    } else {
        "This location has low suitability for an ATM placement.".to_string()
    }
}

fn validate_factors(factors: &LocationFactors) -> Result<(), ScoringError> {
    let non_negative = [
        (FactorKind::PopulationDensity, factors.population_density),
        (FactorKind::CommercialActivity, factors.commercial_activity),
        (FactorKind::TrafficFlow, factors.traffic_flow),
        (FactorKind::PublicTransport, factors.public_transport),
    ];

    for (field, value) in non_negative {
        if !value.is_finite() {
            return Err(ScoringError::InvalidFactor {
                field,
                message: format!("must be finite, got {value}"),
            });
        }
        if value < 0.0 {
            return Err(ScoringError::InvalidFactor {
                field,
                message: format!("must not be negative, got {value}"),
            });
        }
    }

    if !factors.land_rate.is_finite() || factors.land_rate <= 0.0 {
        return Err(ScoringError::InvalidFactor {
            field: FactorKind::LandRate,
            message: format!("must be a positive amount, got {}", factors.land_rate),
        });
    }

    Ok(())
}

fn validate_weights(weights: &FactorWeights) -> Result<(), ScoringError> {
    for field in FactorKind::iter() {
        let value = weights.get(field);
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ScoringError::InvalidWeight { field, value });
        }
    }

    if weights.sum() <= 0.0 {
        return Err(ScoringError::ZeroWeightSum);
    }

    Ok(())
}
