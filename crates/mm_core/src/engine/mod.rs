//! The matchup engine: scoring, recommendation, batch generation and pool
//! optimization over an immutable catalog.

pub mod batch;
pub mod config;
pub mod fairness;
pub mod oracle;
pub mod pools;
pub mod recommend;
pub mod sampling;
pub mod scoring;
pub mod suggest;


use rand::Rng;

pub use config::{PoolConfig, WeightProfile};
pub use fairness::FairnessIndex;
pub use oracle::WinRateOracle;
pub use scoring::{fairness_score, individual_fit, pair_score, SidePreferences};

use crate::models::{FairPools, Fighter, PickSuggestion, ScoredCandidate, WinRateTable};

/// One engine instance per catalog + win-rate table.
///
/// Everything inside is fixed at construction: the catalog, the oracle and
/// the precomputed fairness index. All operations take `&self` plus explicit
/// per-call weights, sizing and randomness, so a single instance can serve
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct MatchupEngine {
    catalog: Vec<Fighter>,
    oracle: WinRateOracle,
    fairness: FairnessIndex,
}

impl MatchupEngine {
    /// Builds the engine, including the O(n^2) fairness index, up front.
    pub fn new(catalog: Vec<Fighter>, table: WinRateTable) -> Self {
        let oracle = WinRateOracle::new(table);
        let fairness = FairnessIndex::build(&catalog, &oracle);
        log::debug!(
            "matchup engine ready: {} fighters, {} recorded win-rate cells",
            catalog.len(),
            oracle.table().len()
        );
        Self { catalog, oracle, fairness }
    }

    pub fn catalog(&self) -> &[Fighter] {
        &self.catalog
    }

    pub fn fighter(&self, id: &str) -> Option<&Fighter> {
        self.catalog.iter().find(|fighter| fighter.id == id)
    }

    /// Win percentage of `subject` against `opponent`; 50.0 when unknown.
    pub fn win_rate(&self, subject: &str, opponent: &str) -> f64 {
        self.oracle.win_rate(subject, opponent)
    }

    pub fn fairness_index(&self) -> &FairnessIndex {
        &self.fairness
    }

    /// Ranked opponents for a fixed fighter; see [`recommend`].
    pub fn recommend_opponents(
        &self,
        fixed: &Fighter,
        available: &[Fighter],
        opponent_prefs: &SidePreferences,
        quantity: usize,
        weights: WeightProfile,
    ) -> Vec<Fighter> {
        recommend::recommend_opponents(
            &self.oracle,
            fixed,
            available,
            opponent_prefs,
            quantity,
            weights,
        )
    }

    /// A capped-repetition batch of scored 1v1 pairings; see [`batch`].
    pub fn generate_batch<R: Rng + ?Sized>(
        &self,
        available: &[Fighter],
        prefs_a: &SidePreferences,
        prefs_b: &SidePreferences,
        quantity: usize,
        weights: WeightProfile,
        rng: &mut R,
    ) -> Vec<ScoredCandidate> {
        batch::generate_batch(&self.oracle, available, prefs_a, prefs_b, quantity, weights, rng)
    }

    /// Best-balanced fixed-size pools, or `None` when infeasible; see
    /// [`pools`].
    pub fn generate_fair_pools<R: Rng + ?Sized>(
        &self,
        available: &[Fighter],
        prefs_a: &SidePreferences,
        prefs_b: &SidePreferences,
        weights: WeightProfile,
        config: &PoolConfig,
        rng: &mut R,
    ) -> Option<FairPools> {
        pools::generate_fair_pools(
            &self.oracle,
            &self.fairness,
            available,
            prefs_a,
            prefs_b,
            weights,
            config,
            rng,
        )
    }

    /// Standalone per-side suggestion (main pick + alternatives); see
    /// [`suggest`].
    pub fn suggest_picks<R: Rng + ?Sized>(
        &self,
        available: &[Fighter],
        prefs: &SidePreferences,
        exclude_ids: &[String],
        rng: &mut R,
    ) -> Option<PickSuggestion> {
        suggest::suggest_picks(available, prefs, exclude_ids, rng)
    }
}
