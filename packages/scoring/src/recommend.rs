//! Templated recommendation sentences.
//!
//! Selected by which sub-factors are weakest or strongest. Deterministic for
//! identical inputs and emitted in a fixed order: commercial activity,
//! public transport, competition, land rate.

use locacash_scoring_models::LocationFactors;

use crate::config::RatingBands;
use crate::score::SubScores;

/// Transport sub-scores at or above this earn an access note.
const TRANSPORT_ACCESS_THRESHOLD: f64 = 70.0;
/// Land-rate sub-scores below this trigger the ROI warning.
const LAND_RATE_WARNING_THRESHOLD: f64 = 50.0;
/// Competitor counts up to this read as moderate competition.
const MODERATE_COMPETITION_MAX: u32 = 3;

pub(crate) fn generate(
    sub_scores: &SubScores,
    factors: &LocationFactors,
    bands: &RatingBands,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if sub_scores.commercial_activity >= bands.high {
        recommendations.push("This location has excellent commercial activity nearby".to_string());
    } else if sub_scores.commercial_activity >= bands.medium {
        recommendations
            .push("Moderate commercial presence offers good potential foot traffic".to_string());
    } else {
        recommendations
            .push("Limited commercial activity may reduce potential transactions".to_string());
    }

    if sub_scores.public_transport >= TRANSPORT_ACCESS_THRESHOLD {
        recommendations.push(
            "Good public transportation access increases potential foot traffic".to_string(),
        );
    }

    let competitors = factors.competing_atms;
    if competitors == 0 {
        recommendations
            .push("No competing ATMs in the area - opportunity to establish presence".to_string());
    } else if competitors <= MODERATE_COMPETITION_MAX {
        recommendations.push(format!(
            "Consider the moderate competition from {competitors} existing ATM(s) in a 1.5km radius"
        ));
    } else {
        recommendations.push(format!(
            "High competition with {competitors} existing ATMs may limit transaction volume"
        ));
    }

    if sub_scores.land_rate < LAND_RATE_WARNING_THRESHOLD {
        recommendations.push(
            "High land rates in this area may affect long-term ROI - consider lease options"
                .to_string(),
        );
    }

    recommendations
}
