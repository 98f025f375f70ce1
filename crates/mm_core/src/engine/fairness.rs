use fxhash::{FxHashMap, FxHashSet};

use super::oracle::WinRateOracle;
use crate::models::Fighter;

/// Per-fighter adjacency of "fair" opponents.
///
/// An opponent is fair when the oracle's win rate lies strictly inside
/// (0, 100) - only guaranteed wins and losses are excluded. Built once over
/// the full catalog (O(n^2) oracle queries, n is a fixed catalog size) so the
/// pool search can replace pairwise oracle re-queries with set intersection.
///
/// Because the oracle answers by complement, the relation comes out symmetric
/// in practice; that is a tested invariant, not an enforced one.
#[derive(Debug, Clone)]
pub struct FairnessIndex {
    fair: FxHashMap<String, FxHashSet<String>>,
}

impl FairnessIndex {
    /// Pure construction from catalog plus oracle; the result is immutable
    /// and owned by whichever engine instance built it.
    pub fn build(catalog: &[Fighter], oracle: &WinRateOracle) -> Self {
        let mut fair: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
        for a in catalog {
            let set = fair.entry(a.id.clone()).or_default();
            for b in catalog {
                if a.id == b.id {
                    continue;
                }
                let rate = oracle.win_rate(&a.id, &b.id);
                if rate > 0.0 && rate < 100.0 {
                    set.insert(b.id.clone());
                }
            }
        }
        Self { fair }
    }

    /// Opponents `id` is fair against. Empty for ids outside the catalog.
    pub fn fair_set(&self, id: &str) -> Option<&FxHashSet<String>> {
        self.fair.get(id)
    }

    pub fn are_fair(&self, a: &str, b: &str) -> bool {
        self.fair.get(a).is_some_and(|set| set.contains(b))
    }

    /// Number of indexed fighters.
    pub fn len(&self) -> usize {
        self.fair.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fair.is_empty()
    }
}
