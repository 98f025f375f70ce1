//! Pure fit and pair scoring.
//!
//! Everything in this module is a total function over in-memory data; all
//! randomness and weighting policy live with the callers.

use fxhash::FxHashSet;

use super::config::WeightProfile;
use super::oracle::WinRateOracle;
use crate::models::{Fighter, RangeBand};

/// Weight of a major tag in overlap scoring.
pub const MAJOR_TAG_WEIGHT: f64 = 1.7;
/// Weight of a minor tag in overlap scoring.
pub const MINOR_TAG_WEIGHT: f64 = 1.0;

/// Maximum ordinal distance on the 1-5 range scale.
const RANGE_SPAN: f64 = 4.0;

/// One side's request: the tags the player wants to play with/against and an
/// optional range preference. `range: None` disables range scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidePreferences {
    pub tags: FxHashSet<String>,
    pub range: Option<RangeBand>,
}

impl SidePreferences {
    pub fn new<I, S>(tags: I, range: Option<RangeBand>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { tags: tags.into_iter().map(Into::into).collect(), range }
    }
}

/// How well `fighter` matches the requested tags, in [0, 1].
///
/// No request at all is neutral (0.5); a tagless fighter facing a concrete
/// request scores 0.0 - the two cases are deliberately distinct.
fn tag_fit(fighter: &Fighter, requested: &FxHashSet<String>) -> f64 {
    if requested.is_empty() {
        return 0.5;
    }
    if fighter.is_untagged() {
        return 0.0;
    }

    let major_hits = fighter.major_tags.iter().filter(|tag| requested.contains(*tag)).count();
    let minor_hits = fighter.minor_tags.iter().filter(|tag| requested.contains(*tag)).count();
    let weighted_matches =
        MAJOR_TAG_WEIGHT * major_hits as f64 + MINOR_TAG_WEIGHT * minor_hits as f64;
    let total_tag_weight = MAJOR_TAG_WEIGHT * fighter.major_tags.len() as f64
        + MINOR_TAG_WEIGHT * fighter.minor_tags.len() as f64;

    // How much of the fighter is what was asked for, and how much of the ask
    // the fighter covers. Requested tags are valued at the major weight.
    let match_ratio = weighted_matches / total_tag_weight;
    let coverage = weighted_matches / (requested.len() as f64 * MAJOR_TAG_WEIGHT);

    0.4 * match_ratio + 0.6 * coverage
}

/// Individual fit against one side's preferences, in [0, 1].
///
/// With an active range preference the range component carries the majority
/// weight: a range mismatch is usually a harder disqualifier than a tag
/// mismatch.
pub fn individual_fit(fighter: &Fighter, prefs: &SidePreferences) -> f64 {
    let tag_score = tag_fit(fighter, &prefs.tags);
    let Some(preferred) = prefs.range else {
        return tag_score;
    };

    let distance = (f64::from(fighter.range.ordinal()) - f64::from(preferred.ordinal())).abs();
    let range_score = 1.0 - distance / RANGE_SPAN;

    0.4 * tag_score + 0.6 * range_score
}

/// Closeness of a matchup to a coin flip: 1.0 at exactly 50%, 0.0 at a
/// guaranteed result.
pub fn fairness_score(win_rate: f64) -> f64 {
    1.0 - (win_rate - 50.0).abs() / 50.0
}

/// Scores a specific pairing on combined fit and fairness.
///
/// Returns `(score, win_rate)`; the win rate is the subject's against the
/// counterpart.
pub fn pair_score(
    oracle: &WinRateOracle,
    subject: &Fighter,
    counterpart: &Fighter,
    prefs_a: &SidePreferences,
    prefs_b: &SidePreferences,
    weights: WeightProfile,
) -> (f64, f64) {
    let dual_fit =
        (individual_fit(subject, prefs_a) + individual_fit(counterpart, prefs_b)) / 2.0;
    let win_rate = oracle.win_rate(&subject.id, &counterpart.id);
    let score = weights.fit * dual_fit + weights.fairness * fairness_score(win_rate);
    (score, win_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WinRateTable;

    fn fighter(id: &str, range: RangeBand, major: &[&str], minor: &[&str]) -> Fighter {
        Fighter {
            id: id.to_string(),
            name: id.to_string(),
            set: "Core".to_string(),
            range,
            major_tags: major.iter().map(|t| t.to_string()).collect(),
            minor_tags: minor.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn no_request_is_neutral() {
        let f = fighter("alpha", RangeBand::Melee, &["aggressive"], &[]);
        assert_eq!(individual_fit(&f, &SidePreferences::default()), 0.5);
    }

    #[test]
    fn tagless_fighter_scores_zero_against_a_request() {
        let f = fighter("alpha", RangeBand::Melee, &[], &[]);
        let prefs = SidePreferences::new(["aggressive"], None);
        assert_eq!(individual_fit(&f, &prefs), 0.0);
    }

    #[test]
    fn exact_match_scores_one() {
        let f = fighter("alpha", RangeBand::Reach, &["aggressive", "mobile"], &[]);
        let prefs =
            SidePreferences::new(["aggressive", "mobile"], Some(RangeBand::Reach));
        assert!((individual_fit(&f, &prefs) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn minor_tags_count_less_than_major_tags() {
        let major_carrier = fighter("alpha", RangeBand::Melee, &["aggressive"], &[]);
        let minor_carrier = fighter("bravo", RangeBand::Melee, &[], &["aggressive"]);
        let prefs = SidePreferences::new(["aggressive"], None);

        // Both fully consist of the requested tag, so the match ratio is 1.0
        // either way, but the minor carrier covers less of the ask.
        let major_fit = individual_fit(&major_carrier, &prefs);
        let minor_fit = individual_fit(&minor_carrier, &prefs);
        assert!((major_fit - 1.0).abs() < 1e-9);
        assert!(minor_fit < major_fit);
        // coverage = 1.0 / 1.7, match_ratio = 1.0
        let expected = 0.4 + 0.6 * (MINOR_TAG_WEIGHT / MAJOR_TAG_WEIGHT);
        assert!((minor_fit - expected).abs() < 1e-9);
    }

    #[test]
    fn off_tags_dilute_the_match_ratio() {
        let focused = fighter("alpha", RangeBand::Melee, &["aggressive"], &[]);
        let diluted = fighter("bravo", RangeBand::Melee, &["aggressive", "defensive"], &[]);
        let prefs = SidePreferences::new(["aggressive"], None);
        assert!(individual_fit(&diluted, &prefs) < individual_fit(&focused, &prefs));
    }

    #[test]
    fn range_distance_scales_linearly() {
        let f = fighter("alpha", RangeBand::Melee, &["aggressive"], &[]);
        let prefs = |band| SidePreferences::new(["aggressive"], Some(band));

        // tag_score is 1.0 throughout; only the range term moves.
        assert!((individual_fit(&f, &prefs(RangeBand::Melee)) - 1.0).abs() < 1e-9);
        let one_step = individual_fit(&f, &prefs(RangeBand::Reach));
        assert!((one_step - (0.4 + 0.6 * 0.75)).abs() < 1e-9);
        let max_distance = individual_fit(&f, &prefs(RangeBand::Ranged));
        assert!((max_distance - 0.4).abs() < 1e-9);
    }

    #[test]
    fn fairness_score_peaks_at_even_matchups() {
        assert_eq!(fairness_score(50.0), 1.0);
        assert_eq!(fairness_score(100.0), 0.0);
        assert_eq!(fairness_score(0.0), 0.0);
        assert!((fairness_score(60.0) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn pair_score_blends_dual_fit_and_fairness() {
        let a = fighter("alpha", RangeBand::Melee, &["aggressive"], &[]);
        let b = fighter("bravo", RangeBand::Reach, &["defensive"], &[]);
        let mut table = WinRateTable::new();
        table.insert("alpha", "bravo", 60.0);
        let oracle = WinRateOracle::new(table);

        let prefs_a = SidePreferences::new(["aggressive"], Some(RangeBand::Melee));
        let prefs_b = SidePreferences::new(["defensive"], Some(RangeBand::Reach));
        let (score, win_rate) =
            pair_score(&oracle, &a, &b, &prefs_a, &prefs_b, WeightProfile::default());

        assert_eq!(win_rate, 60.0);
        // dual fit is (1.0 + 1.0) / 2 = 1.0, fairness is 0.8.
        assert!((score - (0.6 * 1.0 + 0.4 * 0.8)).abs() < 1e-9);
    }
}
