//! Ranked single-opponent recommendation.

use std::cmp::Ordering;

use super::config::WeightProfile;
use super::oracle::WinRateOracle;
use super::scoring::{fairness_score, individual_fit, SidePreferences};
use crate::models::Fighter;

/// Ranks `available` as opponents for `fixed`, best first.
///
/// Fairness is measured against the fixed fighter; fit is the candidate's
/// own match with the opponent-side preferences. The fixed fighter's own
/// tags and range play no role here - the asymmetry is intentional: the
/// caller already chose that fighter.
pub(crate) fn recommend_opponents(
    oracle: &WinRateOracle,
    fixed: &Fighter,
    available: &[Fighter],
    opponent_prefs: &SidePreferences,
    quantity: usize,
    weights: WeightProfile,
) -> Vec<Fighter> {
    let mut candidates: Vec<(f64, &Fighter)> = available
        .iter()
        .filter(|candidate| candidate.id != fixed.id)
        .map(|candidate| {
            let fairness = fairness_score(oracle.win_rate(&fixed.id, &candidate.id));
            let fit = individual_fit(candidate, opponent_prefs);
            (weights.fairness * fairness + weights.fit * fit, candidate)
        })
        .collect();

    // Stable sort: score ties keep the catalog order they arrived in.
    candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    candidates.into_iter().take(quantity).map(|(_, candidate)| candidate.clone()).collect()
}
