//! Scoring and pool-search configuration.

use serde::{Deserialize, Serialize};

/// Fit-vs-fairness weighting applied to every combined score.
///
/// The two weights always sum to 1.0. Profiles are plain values built per
/// request and passed into each scoring call; the engine instance holds no
/// mutable weight state, so concurrent requests cannot interfere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub fit: f64,
    pub fairness: f64,
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self { fit: 0.6, fairness: 0.4 }
    }
}

impl WeightProfile {
    /// Fit-heavy split for exploring new fighters.
    pub fn discovery() -> Self {
        Self { fit: 0.7, fairness: 0.3 }
    }

    /// Fairness-heavy split for competitive play.
    pub fn fairness_focused() -> Self {
        Self { fit: 0.3, fairness: 0.7 }
    }

    /// Explicit fairness ratio, clamped to [0, 1]; fit takes the remainder.
    pub fn from_fairness_ratio(ratio: f64) -> Self {
        let fairness = ratio.clamp(0.0, 1.0);
        Self { fit: 1.0 - fairness, fairness }
    }

    /// Resolves a request's mode string.
    ///
    /// `"discovery"` and `"fairness"` select the named presets; `"custom"`
    /// reads `fairness_ratio` as a decimal string. Anything unrecognised -
    /// including a non-numeric ratio - falls back to the default split: a
    /// bad ratio degrades to sane weighting instead of failing the request.
    pub fn from_mode(mode: Option<&str>, fairness_ratio: Option<&str>) -> Self {
        match mode.map(str::trim) {
            Some("discovery") => Self::discovery(),
            Some("fairness") => Self::fairness_focused(),
            Some("custom") => match fairness_ratio.and_then(|raw| raw.trim().parse::<f64>().ok()) {
                Some(ratio) if ratio.is_finite() => Self::from_fairness_ratio(ratio),
                _ => Self::default(),
            },
            _ => Self::default(),
        }
    }
}

/// Pool sizing for the fair-pool optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Target size of side A's pool.
    pub side_a_size: usize,
    /// Target size of side B's pool. May differ from side A.
    pub side_b_size: usize,
    /// Elite candidates sampled per side before combination search.
    pub elite_k: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { side_a_size: 4, side_b_size: 3, elite_k: 12 }
    }
}
