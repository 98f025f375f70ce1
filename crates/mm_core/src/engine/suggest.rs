//! Standalone per-side pick suggestions.
//!
//! Unlike the opponent recommender, this scores one side in isolation - no
//! win-rate data involved. It backs the "suggest by preferences" flow where a
//! player has not fixed a fighter yet: any tag hit and an exact range match
//! dominate the score, and a small random term breaks ties so repeated
//! requests rotate through equally-good picks.

use std::cmp::Ordering;

use rand::Rng;

use super::scoring::SidePreferences;
use crate::models::{Fighter, PickSuggestion};

/// Alternatives returned alongside the main pick.
const ALTERNATIVE_COUNT: usize = 3;

fn pick_score<R: Rng + ?Sized>(fighter: &Fighter, prefs: &SidePreferences, rng: &mut R) -> f64 {
    let mut score = 1.0;
    if !prefs.tags.is_empty() && fighter.has_any_tag(&prefs.tags) {
        score += 10.0;
    }
    if prefs.range == Some(fighter.range) {
        score += 8.0;
    }
    score + rng.gen_range(0.0..0.1)
}

/// Best pick plus up to three alternatives, or `None` when every fighter is
/// excluded.
pub(crate) fn suggest_picks<R: Rng + ?Sized>(
    available: &[Fighter],
    prefs: &SidePreferences,
    exclude_ids: &[String],
    rng: &mut R,
) -> Option<PickSuggestion> {
    let mut scored: Vec<(f64, &Fighter)> = available
        .iter()
        .filter(|fighter| !exclude_ids.contains(&fighter.id))
        .map(|fighter| (pick_score(fighter, prefs, rng), fighter))
        .collect();
    if scored.is_empty() {
        return None;
    }
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let mut picks = scored.into_iter().map(|(_, fighter)| fighter.clone());
    let main = picks.next()?;
    Some(PickSuggestion { main, alternatives: picks.take(ALTERNATIVE_COUNT).collect() })
}
