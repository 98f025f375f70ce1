//! Data model for the matchup engine.
//!
//! Everything here is plain, serde-friendly data: the fighter catalog entry,
//! the sparse win-rate table and the transient result records produced by the
//! engine operations.

pub mod candidate;
pub mod fighter;
pub mod win_table;

pub use candidate::{FairPools, PickSuggestion, ScoredCandidate};
pub use fighter::{parse_range_pref, Fighter, RangeBand};
pub use win_table::{WinRateMap, WinRateTable};
