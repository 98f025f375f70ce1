use fxhash::FxHashMap;
use serde::Deserialize;

/// Raw nested mapping as it arrives in request JSON:
/// `subject id -> opponent id -> win percentage`.
pub type WinRateMap = FxHashMap<String, FxHashMap<String, f64>>;

/// Sparse, directional win-rate table.
///
/// An entry for (A, B) need not have a mirror entry for (B, A); the oracle
/// derives the missing direction by complement. Construction drops cells that
/// are not usable percentages: the offline ingestion pipeline emits `-2` as a
/// "no recorded games" sentinel, and those cells mean *absent*, not zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "WinRateMap")]
pub struct WinRateTable {
    entries: WinRateMap,
}

fn is_usable_pct(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

impl WinRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a raw nested map, discarding sentinel and
    /// out-of-range cells.
    pub fn from_map(raw: WinRateMap) -> Self {
        let mut entries: WinRateMap = FxHashMap::default();
        for (subject, row) in raw {
            let filtered: FxHashMap<String, f64> =
                row.into_iter().filter(|(_, pct)| is_usable_pct(*pct)).collect();
            if !filtered.is_empty() {
                entries.insert(subject, filtered);
            }
        }
        Self { entries }
    }

    /// Records a win rate, ignoring values outside [0, 100].
    pub fn insert(&mut self, subject: &str, opponent: &str, pct: f64) {
        if is_usable_pct(pct) {
            self.entries
                .entry(subject.to_string())
                .or_default()
                .insert(opponent.to_string(), pct);
        }
    }

    /// Direct lookup in the recorded direction only.
    pub fn get(&self, subject: &str, opponent: &str) -> Option<f64> {
        self.entries.get(subject).and_then(|row| row.get(opponent)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded directional cells.
    pub fn len(&self) -> usize {
        self.entries.values().map(|row| row.len()).sum()
    }
}

impl From<WinRateMap> for WinRateTable {
    fn from(raw: WinRateMap) -> Self {
        Self::from_map(raw)
    }
}
