//! Fair-pool optimization.
//!
//! Selects two fixed-size (possibly asymmetric) groups of fighters that
//! maximize combined fit and cross-pool fairness. The search is a bounded
//! heuristic: per side, an elite subset is sampled by fit weight, and only
//! combinations inside those subsets are enumerated. Fairness-adjacency
//! intersection prunes side-A combinations that cannot possibly face a fully
//! fair side-B group.

use std::cmp::Ordering;

use fxhash::FxHashSet;
use rand::Rng;

use super::config::{PoolConfig, WeightProfile};
use super::fairness::FairnessIndex;
use super::oracle::WinRateOracle;
use super::sampling::weighted_sample_distinct;
use super::scoring::{fairness_score, individual_fit, SidePreferences};
use crate::models::{FairPools, Fighter};

/// Optimizes a side-A and side-B pool out of `available`.
///
/// Returns `None` when the roster cannot fill the larger pool or when no
/// combination pair survives fairness pruning - an infeasible request, not
/// an error.
pub(crate) fn generate_fair_pools<R: Rng + ?Sized>(
    oracle: &WinRateOracle,
    fairness: &FairnessIndex,
    available: &[Fighter],
    prefs_a: &SidePreferences,
    prefs_b: &SidePreferences,
    weights: WeightProfile,
    config: &PoolConfig,
    rng: &mut R,
) -> Option<FairPools> {
    if config.side_a_size == 0 || config.side_b_size == 0 {
        return None;
    }
    if available.len() < config.side_a_size.max(config.side_b_size) {
        return None;
    }

    // 1. Individual fit per fighter, once per side.
    let fits_a: Vec<f64> = available.iter().map(|f| individual_fit(f, prefs_a)).collect();
    let fits_b: Vec<f64> = available.iter().map(|f| individual_fit(f, prefs_b)).collect();

    // 2. Elite selection. Sampling by fit weight across the *whole* roster
    //    (instead of slicing the top K of a sorted list) keeps score-tied
    //    fighters from being picked in catalog order every time.
    let elite_count = config.elite_k.min(available.len());
    let elite_a = weighted_sample_distinct(rng, &fits_a, elite_count);
    let elite_b = weighted_sample_distinct(rng, &fits_b, elite_count);

    // 3. Enumerate combinations within each elite set.
    let combos_a = combinations(&elite_a, config.side_a_size);
    let combos_b = combinations(&elite_b, config.side_b_size);

    let mut best: Option<(Vec<usize>, Vec<usize>, f64)> = None;
    let mut pruned = 0usize;

    for combo_a in &combos_a {
        // 4. Intersect the fairness adjacency of every side-A member: the
        //    universe of opponents fair against the whole group. Too small a
        //    universe rules out every side-B combination at once.
        let universe = adjacency_intersection(fairness, available, combo_a);
        if universe.len() < config.side_b_size {
            pruned += 1;
            continue;
        }

        for combo_b in &combos_b {
            if !combo_b.iter().all(|&index| universe.contains(available[index].id.as_str())) {
                continue;
            }

            // 5. Combined pool score: average fit over both pools plus
            //    average fairness over every cross pair.
            let fit_sum: f64 = combo_a.iter().map(|&i| fits_a[i]).sum::<f64>()
                + combo_b.iter().map(|&j| fits_b[j]).sum::<f64>();
            let avg_fit = fit_sum / (config.side_a_size + config.side_b_size) as f64;

            let mut fairness_sum = 0.0;
            for &i in combo_a {
                for &j in combo_b {
                    fairness_sum += fairness_score(
                        oracle.win_rate(&available[i].id, &available[j].id),
                    );
                }
            }
            let avg_fairness = fairness_sum / (combo_a.len() * combo_b.len()) as f64;

            let total = weights.fit * avg_fit + weights.fairness * avg_fairness;
            if best.as_ref().map_or(true, |(_, _, score)| total > *score) {
                best = Some((combo_a.clone(), combo_b.clone(), total));
            }
        }
    }
    log::debug!(
        "pool search pruned {pruned} of {} side-A combinations",
        combos_a.len()
    );

    let (pool_a, pool_b, total_score) = best?;

    // 6. Presentation order: headline the member with the best own-fit plus
    //    average fairness against the now-fixed opposing pool. Membership is
    //    already settled; this only sorts.
    let ordered_a = order_for_presentation(oracle, available, &pool_a, &fits_a, &pool_b, weights);
    let ordered_b = order_for_presentation(oracle, available, &pool_b, &fits_b, &pool_a, weights);

    Some(FairPools {
        side_a: ordered_a.into_iter().map(|i| available[i].clone()).collect(),
        side_b: ordered_b.into_iter().map(|i| available[i].clone()).collect(),
        total_score,
    })
}

/// Intersection of the fair-opponent sets of every fighter in `members`.
fn adjacency_intersection<'a>(
    fairness: &'a FairnessIndex,
    available: &[Fighter],
    members: &[usize],
) -> FxHashSet<&'a str> {
    let mut iter = members.iter();
    let Some(&first) = iter.next() else {
        return FxHashSet::default();
    };
    let mut universe: FxHashSet<&str> = match fairness.fair_set(&available[first].id) {
        Some(set) => set.iter().map(String::as_str).collect(),
        None => return FxHashSet::default(),
    };
    for &index in iter {
        if universe.is_empty() {
            break;
        }
        match fairness.fair_set(&available[index].id) {
            Some(set) => universe.retain(|id| set.contains(*id)),
            None => universe.clear(),
        }
    }
    universe
}

fn order_for_presentation(
    oracle: &WinRateOracle,
    available: &[Fighter],
    members: &[usize],
    own_fits: &[f64],
    opposing: &[usize],
    weights: WeightProfile,
) -> Vec<usize> {
    let mut keyed: Vec<(f64, usize)> = members
        .iter()
        .map(|&index| {
            let mean_fairness = opposing
                .iter()
                .map(|&other| {
                    fairness_score(oracle.win_rate(&available[index].id, &available[other].id))
                })
                .sum::<f64>()
                / opposing.len() as f64;
            (weights.fit * own_fits[index] + weights.fairness * mean_fairness, index)
        })
        .collect();
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, index)| index).collect()
}

/// All k-combinations of `items`, preserving item order within each combo.
fn combinations(items: &[usize], k: usize) -> Vec<Vec<usize>> {
    fn extend(
        items: &[usize],
        k: usize,
        start: usize,
        current: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        let needed = k - current.len();
        for index in start..=items.len().saturating_sub(needed) {
            current.push(items[index]);
            extend(items, k, index + 1, current, out);
            current.pop();
        }
    }

    if k == 0 || k > items.len() {
        return Vec::new();
    }
    let mut out = Vec::new();
    extend(items, k, 0, &mut Vec::with_capacity(k), &mut out);
    out
}
