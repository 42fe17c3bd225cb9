//! Value-density greedy selection.
//!
//! The classic fractional-relaxation ordering applied to 0/1 acceptance:
//! rank by score per unit cost, walk once, take whatever still fits. Not
//! optimal in general — a bundle of lower-density sites can beat a dense
//! site whose price divides the remaining budget badly — but O(n log n) and
//! the compatibility baseline the rest of the system expects.

use locacash_portfolio_models::{AtmLocation, OptimizationResult};

use crate::{PortfolioError, ranked, validate};

/// Selects a subset of `locations` maximizing total score with total land
/// rate at most `budget`, using the greedy heuristic.
///
/// Deterministic: ranking ties fall back to score descending, then id
/// ascending, so identical inputs always produce identical output, selected
/// locations included, in acceptance order with `is_selected` set.
///
/// An empty candidate list or a budget no candidate fits yields the empty
/// portfolio, not an error.
///
/// # Errors
///
/// Returns [`PortfolioError`] for a negative or non-finite budget, a
/// non-positive or non-finite land rate, out-of-range coordinates, or
/// duplicate ids.
pub fn optimize(
    locations: &[AtmLocation],
    budget: f64,
) -> Result<OptimizationResult, PortfolioError> {
    validate(locations, budget)?;

    let mut selected_locations = Vec::new();
    let mut total_value: u32 = 0;
    let mut used_budget = 0.0;

    for candidate in ranked(locations) {
        let price = candidate.metrics.land_rate;
        if used_budget + price > budget {
            continue;
        }

        used_budget += price;
        total_value += u32::from(candidate.metrics.score);
        let mut funded = candidate.clone();
        funded.is_selected = true;
        selected_locations.push(funded);
    }

    log::debug!(
        "greedy selected {}/{} locations, value {total_value}, used {used_budget:.2} of {budget:.2}",
        selected_locations.len(),
        locations.len(),
    );

    Ok(OptimizationResult {
        selected_locations,
        total_value,
        used_budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::candidate;

    #[test]
    fn prefers_value_density_within_budget() {
        // Efficiencies: a 0.0018, b 0.00233, c 0.003 — greedy order c, b, a.
        // c fits (20k used), b fits (50k used), a no longer fits.
        let locations = vec![
            candidate("a", 90, 50_000.0),
            candidate("b", 70, 30_000.0),
            candidate("c", 60, 20_000.0),
        ];

        let result = optimize(&locations, 50_000.0).unwrap();

        let ids: Vec<&str> = result
            .selected_locations
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "b"]);
        assert_eq!(result.total_value, 130);
        assert!((result.used_budget - 50_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_candidates_yield_empty_portfolio() {
        let result = optimize(&[], 100_000.0).unwrap();
        assert_eq!(result, OptimizationResult::empty());
    }

    #[test]
    fn unaffordable_single_location_yields_empty_portfolio() {
        let locations = vec![candidate("a", 95, 80_000.0)];
        let result = optimize(&locations, 50_000.0).unwrap();
        assert_eq!(result, OptimizationResult::empty());
    }

    #[test]
    fn zero_budget_yields_empty_portfolio() {
        let locations = vec![
            candidate("a", 90, 50_000.0),
            candidate("b", 70, 30_000.0),
        ];
        let result = optimize(&locations, 0.0).unwrap();
        assert_eq!(result, OptimizationResult::empty());
    }

    #[test]
    fn ample_budget_selects_everything() {
        let locations = vec![
            candidate("a", 90, 50_000.0),
            candidate("b", 70, 30_000.0),
            candidate("c", 60, 20_000.0),
        ];
        let result = optimize(&locations, 1_000_000.0).unwrap();
        assert_eq!(result.selected_locations.len(), 3);
        assert_eq!(result.total_value, 220);
        assert!((result.used_budget - 100_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn used_budget_never_exceeds_budget() {
        let locations = vec![
            candidate("a", 55, 17_300.50),
            candidate("b", 72, 41_950.25),
            candidate("c", 64, 23_100.75),
            candidate("d", 81, 62_480.00),
        ];
        for budget in [0.0, 10_000.0, 40_000.0, 75_000.0, 200_000.0] {
            let result = optimize(&locations, budget).unwrap();
            assert!(result.used_budget <= budget);
        }
    }

    #[test]
    fn identical_efficiency_resolves_by_id() {
        // Same score, same land rate — the documented tie-break is id
        // ascending, on every run.
        let locations = vec![candidate("beta", 60, 20_000.0), candidate("alfa", 60, 20_000.0)];
        for _ in 0..3 {
            let result = optimize(&locations, 20_000.0).unwrap();
            assert_eq!(result.selected_locations.len(), 1);
            assert_eq!(result.selected_locations[0].id, "alfa");
        }
    }

    #[test]
    fn output_is_deterministic_across_runs() {
        let locations = vec![
            candidate("a", 90, 50_000.0),
            candidate("b", 70, 30_000.0),
            candidate("c", 60, 20_000.0),
        ];
        let first = optimize(&locations, 60_000.0).unwrap();
        let second = optimize(&locations, 60_000.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn selected_locations_are_flagged() {
        let locations = vec![candidate("a", 90, 50_000.0)];
        let result = optimize(&locations, 50_000.0).unwrap();
        assert!(result.selected_locations[0].is_selected);
        // Inputs are untouched.
        assert!(!locations[0].is_selected);
    }

    #[test]
    fn rerunning_on_own_output_is_stable() {
        let locations = vec![
            candidate("a", 90, 50_000.0),
            candidate("b", 70, 30_000.0),
        ];
        let first = optimize(&locations, 90_000.0).unwrap();
        let second = optimize(&first.selected_locations, 90_000.0).unwrap();
        assert_eq!(first.total_value, second.total_value);
        assert!((first.used_budget - second.used_budget).abs() < f64::EPSILON);
    }
}
