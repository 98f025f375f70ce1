//! 1v1 matchup batch generation.
//!
//! A batch favours high-scoring pairs without collapsing onto them: every
//! draw is a weighted-random pick from the best still-eligible pairs, and a
//! per-side frequency cap keeps any one fighter from dominating the batch.

use std::cmp::Ordering;

use fxhash::FxHashMap;
use rand::Rng;

use super::config::WeightProfile;
use super::oracle::WinRateOracle;
use super::sampling::weighted_pick;
use super::scoring::{pair_score, SidePreferences};
use crate::models::{Fighter, ScoredCandidate};

/// Times one fighter may appear on a given side within a single batch.
pub const MAX_REPEATS_PER_SIDE: u32 = 3;
/// The weighted draw considers this many of the best eligible pairs.
pub const SELECTION_WINDOW: usize = 10;

/// Generates up to `quantity` scored pairings from `available`.
///
/// All ordered pairs are scored and sorted once; each draw then filters by
/// the per-side caps, takes the top [`SELECTION_WINDOW`] survivors and picks
/// one at random, weighted by score. Returns fewer than `quantity` entries
/// only when the caps exhaust every pair.
pub(crate) fn generate_batch<R: Rng + ?Sized>(
    oracle: &WinRateOracle,
    available: &[Fighter],
    prefs_a: &SidePreferences,
    prefs_b: &SidePreferences,
    quantity: usize,
    weights: WeightProfile,
    rng: &mut R,
) -> Vec<ScoredCandidate> {
    // Score every ordered pair once.
    let mut all_pairs: Vec<ScoredCandidate> = Vec::new();
    for subject in available {
        for counterpart in available {
            if subject.id == counterpart.id {
                continue;
            }
            let (score, win_rate) =
                pair_score(oracle, subject, counterpart, prefs_a, prefs_b, weights);
            all_pairs.push(ScoredCandidate {
                subject: subject.id.clone(),
                counterpart: counterpart.id.clone(),
                score,
                win_rate,
            });
        }
    }
    all_pairs.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut subject_counts: FxHashMap<&str, u32> = FxHashMap::default();
    let mut counterpart_counts: FxHashMap<&str, u32> = FxHashMap::default();
    let mut results = Vec::with_capacity(quantity);

    for _ in 0..quantity {
        // Pairs whose fighters still have headroom on their side.
        let eligible: Vec<&ScoredCandidate> = all_pairs
            .iter()
            .filter(|pair| {
                subject_counts.get(pair.subject.as_str()).copied().unwrap_or(0)
                    < MAX_REPEATS_PER_SIDE
                    && counterpart_counts.get(pair.counterpart.as_str()).copied().unwrap_or(0)
                        < MAX_REPEATS_PER_SIDE
            })
            .collect();
        if eligible.is_empty() {
            log::debug!("batch stopped early at {} of {} requested pairs", results.len(), quantity);
            break;
        }

        let window = &eligible[..eligible.len().min(SELECTION_WINDOW)];
        let window_weights: Vec<f64> = window.iter().map(|pair| pair.score).collect();
        let Some(index) = weighted_pick(rng, &window_weights) else {
            break;
        };
        let choice = window[index];

        *subject_counts.entry(choice.subject.as_str()).or_insert(0) += 1;
        *counterpart_counts.entry(choice.counterpart.as_str()).or_insert(0) += 1;
        results.push(choice.clone());
    }

    results
}
