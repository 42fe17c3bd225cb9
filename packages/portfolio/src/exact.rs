//! Exact 0/1 knapsack selection over a discretized budget.
//!
//! Strictly-better-or-equal alternative to the greedy baseline: dynamic
//! programming over the budget split into [`BUDGET_STEPS`] slices. Prices
//! are rounded up to whole slices, so the discretization can only tighten
//! the budget constraint, never loosen it — at the cost that a combination
//! fitting the real budget exactly can become infeasible in the table. The
//! greedy result is computed alongside and returned whenever it scores
//! higher, so the solver is never worse than the baseline. The table is
//! `locations x BUDGET_STEPS` cells, trivial at the scale of a user's
//! saved-analysis history.

use locacash_portfolio_models::{AtmLocation, OptimizationResult};

use crate::{PortfolioError, greedy, ranked, validate};

/// Number of discrete budget slices in the DP table.
const BUDGET_STEPS: usize = 10_000;

/// Selects a subset of `locations` maximizing total score with total land
/// rate at most `budget`, solving the 0/1 knapsack exactly over the
/// discretized budget and falling back to the greedy selection when slice
/// rounding costs the table a feasible combination.
///
/// Same contract as [`crate::optimize`]: pure, deterministic (candidates are
/// processed in the shared ranked order and DP ties keep the earlier
/// solution), empty input or zero budget yields the empty portfolio, and
/// `used_budget <= budget` always holds. `total_value` is never lower than
/// what [`crate::optimize`] returns for the same input. Selected locations
/// are returned in ranked order with `is_selected` set.
///
/// # Errors
///
/// Returns [`PortfolioError`] for the same invalid inputs as
/// [`crate::optimize`].
pub fn optimize_exact(
    locations: &[AtmLocation],
    budget: f64,
) -> Result<OptimizationResult, PortfolioError> {
    validate(locations, budget)?;
    if locations.is_empty() || budget <= 0.0 {
        return Ok(OptimizationResult::empty());
    }

    let candidates = ranked(locations);
    // BUDGET_STEPS is far below f64's exact-integer range.
    #[allow(clippy::cast_precision_loss)]
    let step = budget / BUDGET_STEPS as f64;

    // Price in whole slices, rounded up. Land rates are validated finite
    // and positive, so the ceiling is a non-negative whole number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let slice_weights: Vec<usize> = candidates
        .iter()
        .map(|c| (c.metrics.land_rate / step).ceil() as usize)
        .collect();

    let mut best: Vec<u32> = vec![0; BUDGET_STEPS + 1];
    let mut keep = vec![vec![false; BUDGET_STEPS + 1]; candidates.len()];

    for (index, candidate) in candidates.iter().enumerate() {
        let weight = slice_weights[index];
        if weight > BUDGET_STEPS {
            continue;
        }
        let value = u32::from(candidate.metrics.score);
        for capacity in (weight..=BUDGET_STEPS).rev() {
            let with_candidate = best[capacity - weight] + value;
            if with_candidate > best[capacity] {
                best[capacity] = with_candidate;
                keep[index][capacity] = true;
            }
        }
    }

    // Walk the keep table backwards to recover the chosen set.
    let mut capacity = BUDGET_STEPS;
    let mut chosen = vec![false; candidates.len()];
    for index in (0..candidates.len()).rev() {
        if keep[index][capacity] {
            chosen[index] = true;
            capacity -= slice_weights[index];
        }
    }

    let mut selected_locations = Vec::new();
    let mut total_value: u32 = 0;
    let mut used_budget = 0.0;

    for (index, candidate) in candidates.iter().enumerate() {
        if !chosen[index] {
            continue;
        }
        let price = candidate.metrics.land_rate;
        // Guards the budget invariant against rounding dust at slice
        // boundaries.
        if used_budget + price > budget {
            continue;
        }
        used_budget += price;
        total_value += u32::from(candidate.metrics.score);
        let mut funded = (*candidate).clone();
        funded.is_selected = true;
        selected_locations.push(funded);
    }

    log::debug!(
        "exact selected {}/{} locations, value {total_value}, used {used_budget:.2} of {budget:.2}",
        selected_locations.len(),
        locations.len(),
    );

    let dp_result = OptimizationResult {
        selected_locations,
        total_value,
        used_budget,
    };

    // Slice rounding tightens each price by up to one slice, which can push
    // an exact-fit combination out of the table. The greedy walk works on
    // real prices, so whenever it beats the table, its selection is the
    // better portfolio.
    let greedy_result = greedy::optimize(locations, budget)?;
    if greedy_result.total_value > dp_result.total_value {
        return Ok(greedy_result);
    }

    Ok(dp_result)
}
