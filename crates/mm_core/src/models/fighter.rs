use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Attack-range category on the game's 1-5 ordinal scale.
///
/// The ordinal distance between two bands drives range-fit scoring: `Melee`
/// and `Ranged` sit four steps apart, `Hybrid` sits in the middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RangeRepr")]
pub enum RangeBand {
    Melee,
    Reach,
    Hybrid,
    #[serde(rename = "Ranged Assist")]
    RangedAssist,
    Ranged,
}

impl Default for RangeBand {
    fn default() -> Self {
        RangeBand::Melee
    }
}

impl RangeBand {
    /// Position on the 1-5 scale.
    pub fn ordinal(self) -> u8 {
        match self {
            RangeBand::Melee => 1,
            RangeBand::Reach => 2,
            RangeBand::Hybrid => 3,
            RangeBand::RangedAssist => 4,
            RangeBand::Ranged => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RangeBand::Melee => "Melee",
            RangeBand::Reach => "Reach",
            RangeBand::Hybrid => "Hybrid",
            RangeBand::RangedAssist => "Ranged Assist",
            RangeBand::Ranged => "Ranged",
        }
    }

    pub fn from_ordinal(value: i64) -> Option<RangeBand> {
        match value {
            1 => Some(RangeBand::Melee),
            2 => Some(RangeBand::Reach),
            3 => Some(RangeBand::Hybrid),
            4 => Some(RangeBand::RangedAssist),
            5 => Some(RangeBand::Ranged),
            _ => None,
        }
    }

    /// Parses a descriptive label or a digit string ("1".."5").
    pub fn from_label(raw: &str) -> Option<RangeBand> {
        let trimmed = raw.trim();
        if let Ok(ordinal) = trimmed.parse::<i64>() {
            return RangeBand::from_ordinal(ordinal);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "melee" => Some(RangeBand::Melee),
            "reach" => Some(RangeBand::Reach),
            "hybrid" => Some(RangeBand::Hybrid),
            "ranged assist" => Some(RangeBand::RangedAssist),
            "ranged" => Some(RangeBand::Ranged),
            _ => None,
        }
    }
}

/// Accepts both the descriptive labels and the raw 1-5 ordinals that catalog
/// JSON may carry for the `range` field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Ordinal(i64),
    Label(String),
}

impl From<RangeRepr> for RangeBand {
    fn from(repr: RangeRepr) -> Self {
        match repr {
            RangeRepr::Ordinal(value) => RangeBand::from_ordinal(value).unwrap_or_default(),
            RangeRepr::Label(label) => RangeBand::from_label(&label).unwrap_or_default(),
        }
    }
}

/// Parses a side's range *preference*.
///
/// `"Any"` and the empty string mean "no preference" and disable range
/// scoring entirely; unrecognised input falls back to `Melee`, the scale's
/// neutral default for unparseable data.
pub fn parse_range_pref(raw: &str) -> Option<RangeBand> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
        return None;
    }
    Some(RangeBand::from_label(trimmed).unwrap_or_default())
}

/// One catalog entry. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: String,
    pub name: String,
    /// Release set the fighter ships in; requests filter the catalog by the
    /// sets the players own.
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub range: RangeBand,
    /// Defining playstyle tags, weighted heavier than minor tags in fit
    /// scoring. Disjoint from `minor_tags` by convention, not enforced.
    #[serde(default)]
    pub major_tags: FxHashSet<String>,
    #[serde(default)]
    pub minor_tags: FxHashSet<String>,
}

impl Fighter {
    pub fn is_untagged(&self) -> bool {
        self.major_tags.is_empty() && self.minor_tags.is_empty()
    }

    /// True when any tag, major or minor, appears in `tags`.
    pub fn has_any_tag(&self, tags: &FxHashSet<String>) -> bool {
        self.major_tags.iter().any(|t| tags.contains(t))
            || self.minor_tags.iter().any(|t| tags.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_span_the_five_point_scale() {
        assert_eq!(RangeBand::Melee.ordinal(), 1);
        assert_eq!(RangeBand::Ranged.ordinal(), 5);
        assert_eq!(RangeBand::from_ordinal(4), Some(RangeBand::RangedAssist));
        assert_eq!(RangeBand::from_ordinal(0), None);
        assert_eq!(RangeBand::from_ordinal(6), None);
    }

    #[test]
    fn labels_and_digit_strings_parse() {
        assert_eq!(RangeBand::from_label("Melee"), Some(RangeBand::Melee));
        assert_eq!(RangeBand::from_label("Ranged Assist"), Some(RangeBand::RangedAssist));
        assert_eq!(RangeBand::from_label("3"), Some(RangeBand::Hybrid));
        assert_eq!(RangeBand::from_label("goblin"), None);
    }

    #[test]
    fn preference_parsing_treats_any_as_no_preference() {
        assert_eq!(parse_range_pref("Any"), None);
        assert_eq!(parse_range_pref(""), None);
        assert_eq!(parse_range_pref("  "), None);
        assert_eq!(parse_range_pref("Reach"), Some(RangeBand::Reach));
        assert_eq!(parse_range_pref("5"), Some(RangeBand::Ranged));
        // Unparseable input falls back to the scale's neutral default.
        assert_eq!(parse_range_pref("garbled"), Some(RangeBand::Melee));
    }

    #[test]
    fn fighter_deserializes_label_and_ordinal_ranges() {
        let from_label: Fighter = serde_json::from_str(
            r#"{"id":"alpha","name":"Alpha","set":"Core","range":"Ranged Assist"}"#,
        )
        .unwrap();
        assert_eq!(from_label.range, RangeBand::RangedAssist);
        assert!(from_label.is_untagged());

        let from_ordinal: Fighter =
            serde_json::from_str(r#"{"id":"bravo","name":"Bravo","set":"Core","range":2}"#)
                .unwrap();
        assert_eq!(from_ordinal.range, RangeBand::Reach);
    }
}
