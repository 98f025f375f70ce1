//! # mm_core - Matchup & Fairness Recommendation Engine
//!
//! This library recommends balanced, preference-fitting opponent pairings
//! and multi-fighter pools for a two-sided competitive game, with a JSON API
//! for easy integration with web handlers and game front ends.
//!
//! ## Features
//! - Symmetric win-rate oracle over a sparse, directional win-rate table
//! - Tag/range fit scoring with configurable fit-vs-fairness weighting
//! - Ranked single-opponent recommendations
//! - Capped-repetition 1v1 batch generation via weighted sampling
//! - Fair multi-fighter pool optimization with adjacency pruning
//! - 100% deterministic given a seed (same seed = same result)

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{
    generate_batch_json, generate_fair_pools_json, recommend_opponents_json, suggest_picks_json,
    BatchRequest, BatchResponse, PoolsRequest, PoolsResponse, RecommendRequest, RecommendResponse,
    SuggestRequest, SuggestResponse,
};
pub use error::{CoreError, Result};

// Re-export engine types
pub use engine::{
    FairnessIndex, MatchupEngine, PoolConfig, SidePreferences, WeightProfile, WinRateOracle,
};

// Re-export model types
pub use models::{
    parse_range_pref, FairPools, Fighter, PickSuggestion, RangeBand, ScoredCandidate, WinRateMap,
    WinRateTable,
};
