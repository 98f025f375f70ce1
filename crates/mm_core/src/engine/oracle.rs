use crate::models::WinRateTable;

/// Answers win-rate queries over the sparse table.
///
/// Lookup order: the direct entry (a, b); else the complement `100 - v` of a
/// recorded (b, a); else the neutral 50.0. Unknown matchups are deliberately
/// treated as even rather than signalled as missing.
#[derive(Debug, Clone)]
pub struct WinRateOracle {
    table: WinRateTable,
}

impl WinRateOracle {
    /// Win rate substituted when neither direction is recorded.
    pub const NEUTRAL: f64 = 50.0;

    pub fn new(table: WinRateTable) -> Self {
        Self { table }
    }

    /// Win percentage of `subject` against `opponent`, always in [0, 100].
    pub fn win_rate(&self, subject: &str, opponent: &str) -> f64 {
        if let Some(direct) = self.table.get(subject, opponent) {
            return direct;
        }
        if let Some(reverse) = self.table.get(opponent, subject) {
            return 100.0 - reverse;
        }
        Self::NEUTRAL
    }

    pub fn table(&self) -> &WinRateTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unknown_matchups_default_to_even() {
        let oracle = WinRateOracle::new(WinRateTable::new());
        assert_eq!(oracle.win_rate("alpha", "bravo"), 50.0);
    }

    #[test]
    fn direct_entry_wins_over_complement() {
        let mut table = WinRateTable::new();
        table.insert("alpha", "bravo", 70.0);
        table.insert("bravo", "alpha", 45.0);
        let oracle = WinRateOracle::new(table);
        assert_eq!(oracle.win_rate("alpha", "bravo"), 70.0);
        assert_eq!(oracle.win_rate("bravo", "alpha"), 45.0);
    }

    #[test]
    fn missing_direction_is_derived_by_complement() {
        let mut table = WinRateTable::new();
        table.insert("bravo", "alpha", 40.0);
        let oracle = WinRateOracle::new(table);
        assert_eq!(oracle.win_rate("alpha", "bravo"), 60.0);
        assert_eq!(oracle.win_rate("bravo", "alpha"), 40.0);
    }

    proptest! {
        #[test]
        fn complement_holds_for_any_recorded_rate(pct in 0.0f64..=100.0) {
            let mut table = WinRateTable::new();
            table.insert("bravo", "alpha", pct);
            let oracle = WinRateOracle::new(table);
            prop_assert!((oracle.win_rate("alpha", "bravo") - (100.0 - pct)).abs() < 1e-9);
        }

        #[test]
        fn queries_always_land_in_percentage_range(pct in -50.0f64..150.0) {
            let mut table = WinRateTable::new();
            table.insert("a", "b", pct); // out-of-range input is discarded
            let oracle = WinRateOracle::new(table);
            let rate = oracle.win_rate("a", "b");
            prop_assert!((0.0..=100.0).contains(&rate));
        }
    }
}
