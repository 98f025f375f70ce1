//! Weighted random selection primitives.
//!
//! Both helpers take an injected `Rng` so callers can seed them for
//! reproducible tests; production callers pass an entropy-seeded generator.

use rand::Rng;

/// Draws one index with probability proportional to its weight.
///
/// Negative weights are treated as zero. When every weight is zero the draw
/// degrades to uniform rather than failing - a list of equally-hopeless
/// candidates still yields a pick. Returns `None` only for an empty slice.
pub fn weighted_pick<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if total <= 0.0 {
        return Some(rng.gen_range(0..weights.len()));
    }

    let mut threshold = rng.gen::<f64>() * total;
    for (index, weight) in weights.iter().enumerate() {
        threshold -= weight.max(0.0);
        if threshold < 0.0 {
            return Some(index);
        }
    }
    // Floating-point slack can leave the threshold barely positive after the
    // last bucket; fall back to the last weighted candidate.
    weights.iter().rposition(|w| *w > 0.0)
}

/// Weighted sampling *without replacement*: up to `k` distinct indices.
///
/// Implemented as an explicit loop - recompute the remaining weights, draw
/// one, remove it - rather than a one-shot library call, so distinctness is
/// guaranteed and the zero-weight uniform fallback applies per draw. The
/// result is in draw order.
pub fn weighted_sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    weights: &[f64],
    k: usize,
) -> Vec<usize> {
    let mut remaining: Vec<usize> = (0..weights.len()).collect();
    let mut picked = Vec::with_capacity(k.min(remaining.len()));
    while picked.len() < k && !remaining.is_empty() {
        let current: Vec<f64> = remaining.iter().map(|&index| weights[index]).collect();
        match weighted_pick(rng, &current) {
            Some(position) => picked.push(remaining.swap_remove(position)),
            None => break,
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn empty_slice_yields_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(weighted_pick(&mut rng, &[]), None);
        assert!(weighted_sample_distinct(&mut rng, &[], 3).is_empty());
    }

    #[test]
    fn zero_weight_candidates_are_never_picked_while_mass_remains() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let weights = [0.0, 3.0, 0.0, 2.0];
        for _ in 0..200 {
            let pick = weighted_pick(&mut rng, &weights).unwrap();
            assert!(pick == 1 || pick == 3);
        }
    }

    #[test]
    fn all_zero_weights_fall_back_to_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let weights = [0.0, 0.0, 0.0];
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[weighted_pick(&mut rng, &weights).unwrap()] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn heavier_weights_are_drawn_more_often() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let weights = [1.0, 9.0];
        let mut heavy = 0;
        for _ in 0..1000 {
            if weighted_pick(&mut rng, &weights) == Some(1) {
                heavy += 1;
            }
        }
        // Expected ~900; allow generous slack.
        assert!(heavy > 750, "heavy candidate drawn only {heavy}/1000 times");
    }

    #[test]
    fn sample_without_replacement_is_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let weights = [5.0, 1.0, 2.0, 4.0, 3.0];
        let sample = weighted_sample_distinct(&mut rng, &weights, 5);
        let mut sorted = sample.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 5);
    }

    #[test]
    fn sample_is_capped_by_population_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let sample = weighted_sample_distinct(&mut rng, &[1.0, 2.0], 10);
        assert_eq!(sample.len(), 2);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let weights = [1.0, 2.0, 3.0, 4.0];
        let a = weighted_sample_distinct(&mut ChaCha8Rng::seed_from_u64(5), &weights, 4);
        let b = weighted_sample_distinct(&mut ChaCha8Rng::seed_from_u64(5), &weights, 4);
        assert_eq!(a, b);
    }
}
