use serde::{Deserialize, Serialize};

use super::Fighter;

/// One scored 1v1 pairing produced by batch generation.
///
/// `subject` plays side A of the matchup, `counterpart` side B; `win_rate` is
/// the subject's win percentage against the counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub subject: String,
    pub counterpart: String,
    pub score: f64,
    pub win_rate: f64,
}

/// Result of the fair-pool optimization.
///
/// Each side is ordered by presentation priority: index 0 is the headline
/// pick. Ordering never changes pool membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairPools {
    pub side_a: Vec<Fighter>,
    pub side_b: Vec<Fighter>,
    pub total_score: f64,
}

/// A standalone per-side suggestion: the best pick plus runner-up
/// alternatives the player can promote instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickSuggestion {
    pub main: Fighter,
    pub alternatives: Vec<Fighter>,
}
