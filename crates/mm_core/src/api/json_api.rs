//! JSON request/response boundary.
//!
//! Each function is self-contained: the request carries the catalog, the
//! win-rate table and the per-call parameters, and the response is plain
//! data with no presentation concerns. Range and weight-mode strings are
//! parsed here, once; the engine below only ever sees typed values.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::engine::{
    suggest, MatchupEngine, PoolConfig, SidePreferences, WeightProfile,
};
use crate::error::{CoreError, Result};
use crate::models::{
    parse_range_pref, FairPools, Fighter, PickSuggestion, RangeBand, ScoredCandidate, WinRateMap,
    WinRateTable,
};

const SCHEMA_VERSION: u8 = 1;

fn ensure_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchema { found });
    }
    Ok(())
}

/// A range preference as requests may spell it: a 1-5 ordinal or a
/// descriptive label (`"Melee"`, `"Ranged Assist"`, `"Any"`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RangeParam {
    Ordinal(i64),
    Label(String),
}

fn resolve_range_pref(param: Option<&RangeParam>) -> Option<RangeBand> {
    match param {
        None => None,
        Some(RangeParam::Ordinal(value)) => {
            Some(RangeBand::from_ordinal(*value).unwrap_or_default())
        }
        Some(RangeParam::Label(label)) => parse_range_pref(label),
    }
}

/// Owned-set filter: an empty filter means the whole catalog is available.
fn filter_owned(catalog: &[Fighter], owned_sets: &[String]) -> Vec<Fighter> {
    if owned_sets.is_empty() {
        return catalog.to_vec();
    }
    catalog.iter().filter(|fighter| owned_sets.contains(&fighter.set)).cloned().collect()
}

fn request_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn default_recommend_quantity() -> usize {
    5
}

fn default_batch_quantity() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub schema_version: u8,
    pub fighters: Vec<Fighter>,
    #[serde(default)]
    pub win_rates: WinRateMap,
    /// The fixed fighter the opponents are recommended for.
    pub fighter_id: String,
    #[serde(default)]
    pub owned_sets: Vec<String>,
    #[serde(default)]
    pub opponent_tags: Vec<String>,
    #[serde(default)]
    pub opponent_range: Option<RangeParam>,
    /// "discovery" | "fairness" | "custom"; anything else uses the default
    /// weight split.
    #[serde(default)]
    pub mode: Option<String>,
    /// Decimal fairness ratio, only read when `mode` is "custom".
    #[serde(default)]
    pub fairness_ratio: Option<String>,
    #[serde(default = "default_recommend_quantity")]
    pub quantity: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub schema_version: u8,
    pub opponents: Vec<Fighter>,
}

/// Ranks opponents for a fixed fighter.
pub fn recommend_opponents_json(request_json: &str) -> Result<String> {
    let request: RecommendRequest = serde_json::from_str(request_json)?;
    ensure_schema(request.schema_version)?;

    let weights = WeightProfile::from_mode(request.mode.as_deref(), request.fairness_ratio.as_deref());
    let prefs = SidePreferences::new(
        request.opponent_tags,
        resolve_range_pref(request.opponent_range.as_ref()),
    );

    let engine = MatchupEngine::new(request.fighters, WinRateTable::from_map(request.win_rates));
    let fixed = engine
        .fighter(&request.fighter_id)
        .ok_or_else(|| CoreError::UnknownFighter { id: request.fighter_id.clone() })?
        .clone();
    let available = filter_owned(engine.catalog(), &request.owned_sets);

    let opponents =
        engine.recommend_opponents(&fixed, &available, &prefs, request.quantity, weights);
    let response = RecommendResponse { schema_version: SCHEMA_VERSION, opponents };
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub schema_version: u8,
    pub fighters: Vec<Fighter>,
    #[serde(default)]
    pub win_rates: WinRateMap,
    #[serde(default)]
    pub owned_sets: Vec<String>,
    #[serde(default)]
    pub side_a_tags: Vec<String>,
    #[serde(default)]
    pub side_b_tags: Vec<String>,
    #[serde(default)]
    pub side_a_range: Option<RangeParam>,
    #[serde(default)]
    pub side_b_range: Option<RangeParam>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub fairness_ratio: Option<String>,
    #[serde(default = "default_batch_quantity")]
    pub quantity: usize,
    /// Omit for a fresh entropy seed; set for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub schema_version: u8,
    pub matchups: Vec<ScoredCandidate>,
}

/// Generates a batch of scored 1v1 pairings.
pub fn generate_batch_json(request_json: &str) -> Result<String> {
    let request: BatchRequest = serde_json::from_str(request_json)?;
    ensure_schema(request.schema_version)?;

    let weights = WeightProfile::from_mode(request.mode.as_deref(), request.fairness_ratio.as_deref());
    let prefs_a = SidePreferences::new(
        request.side_a_tags,
        resolve_range_pref(request.side_a_range.as_ref()),
    );
    let prefs_b = SidePreferences::new(
        request.side_b_tags,
        resolve_range_pref(request.side_b_range.as_ref()),
    );

    let engine = MatchupEngine::new(request.fighters, WinRateTable::from_map(request.win_rates));
    let available = filter_owned(engine.catalog(), &request.owned_sets);
    let mut rng = request_rng(request.seed);

    let matchups = engine.generate_batch(
        &available,
        &prefs_a,
        &prefs_b,
        request.quantity,
        weights,
        &mut rng,
    );
    let response = BatchResponse { schema_version: SCHEMA_VERSION, matchups };
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
pub struct PoolsRequest {
    pub schema_version: u8,
    pub fighters: Vec<Fighter>,
    #[serde(default)]
    pub win_rates: WinRateMap,
    #[serde(default)]
    pub owned_sets: Vec<String>,
    #[serde(default)]
    pub side_a_tags: Vec<String>,
    #[serde(default)]
    pub side_b_tags: Vec<String>,
    #[serde(default)]
    pub side_a_range: Option<RangeParam>,
    #[serde(default)]
    pub side_b_range: Option<RangeParam>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub fairness_ratio: Option<String>,
    /// Pool sizing; missing fields take the 4-vs-3, elite-12 defaults.
    #[serde(default)]
    pub pool: PoolConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PoolsResponse {
    pub schema_version: u8,
    /// `None` means the request was infeasible - not enough fighters or no
    /// fair combination survived.
    pub pools: Option<FairPools>,
}

/// Optimizes a pair of fair pools.
pub fn generate_fair_pools_json(request_json: &str) -> Result<String> {
    let request: PoolsRequest = serde_json::from_str(request_json)?;
    ensure_schema(request.schema_version)?;

    let weights = WeightProfile::from_mode(request.mode.as_deref(), request.fairness_ratio.as_deref());
    let prefs_a = SidePreferences::new(
        request.side_a_tags,
        resolve_range_pref(request.side_a_range.as_ref()),
    );
    let prefs_b = SidePreferences::new(
        request.side_b_tags,
        resolve_range_pref(request.side_b_range.as_ref()),
    );

    let engine = MatchupEngine::new(request.fighters, WinRateTable::from_map(request.win_rates));
    let available = filter_owned(engine.catalog(), &request.owned_sets);
    let mut rng = request_rng(request.seed);

    let pools = engine.generate_fair_pools(
        &available,
        &prefs_a,
        &prefs_b,
        weights,
        &request.pool,
        &mut rng,
    );
    let response = PoolsResponse { schema_version: SCHEMA_VERSION, pools };
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub schema_version: u8,
    pub fighters: Vec<Fighter>,
    #[serde(default)]
    pub owned_sets: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub range: Option<RangeParam>,
    /// Already-locked fighters to leave out of the suggestion.
    #[serde(default)]
    pub exclude_ids: Vec<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub schema_version: u8,
    pub suggestion: Option<PickSuggestion>,
}

/// Standalone per-side suggestion; no win-rate data involved, so the request
/// carries none.
pub fn suggest_picks_json(request_json: &str) -> Result<String> {
    let request: SuggestRequest = serde_json::from_str(request_json)?;
    ensure_schema(request.schema_version)?;

    let prefs = SidePreferences::new(request.tags, resolve_range_pref(request.range.as_ref()));
    let available = filter_owned(&request.fighters, &request.owned_sets);
    let mut rng = request_rng(request.seed);

    let suggestion = suggest::suggest_picks(&available, &prefs, &request.exclude_ids, &mut rng);
    let response = SuggestResponse { schema_version: SCHEMA_VERSION, suggestion };
    Ok(serde_json::to_string(&response)?)
}
