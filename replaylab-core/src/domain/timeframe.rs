//! Timeframe — the sampling granularity of a series.

use serde::{Deserialize, Serialize};

/// Sampling granularity. Finer granularity means more samples per series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    M1,
    M2,
    M5,
    M15,
}

impl Timeframe {
    /// All supported timeframes, in display order.
    pub const ALL: [Timeframe; 4] = [Timeframe::M1, Timeframe::M2, Timeframe::M5, Timeframe::M15];

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::M1 => "1min",
            Timeframe::M2 => "2min",
            Timeframe::M5 => "5min",
            Timeframe::M15 => "15min",
        }
    }

    /// Number of samples a generated series of this granularity holds.
    pub fn sample_count(self) -> usize {
        match self {
            Timeframe::M1 => 1000,
            Timeframe::M2 => 500,
            Timeframe::M5 => 200,
            Timeframe::M15 => 96,
        }
    }

    /// Parse a display label. Callers fall back to `Timeframe::default()`
    /// on unknown labels rather than failing.
    pub fn from_label(label: &str) -> Option<Timeframe> {
        Timeframe::ALL.into_iter().find(|tf| tf.label() == label)
    }

    pub fn index(self) -> usize {
        match self {
            Timeframe::M1 => 0,
            Timeframe::M2 => 1,
            Timeframe::M5 => 2,
            Timeframe::M15 => 3,
        }
    }

    pub fn next(self) -> Timeframe {
        Timeframe::ALL[(self.index() + 1) % Timeframe::ALL.len()]
    }

    pub fn prev(self) -> Timeframe {
        Timeframe::ALL[(self.index() + Timeframe::ALL.len() - 1) % Timeframe::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_shrink_with_coarser_granularity() {
        let counts: Vec<usize> = Timeframe::ALL.iter().map(|tf| tf.sample_count()).collect();
        assert_eq!(counts, vec![1000, 500, 200, 96]);
    }

    #[test]
    fn label_roundtrip() {
        for tf in Timeframe::ALL {
            assert_eq!(Timeframe::from_label(tf.label()), Some(tf));
        }
        assert_eq!(Timeframe::from_label("4h"), None);
    }

    #[test]
    fn cycle_covers_all() {
        assert_eq!(Timeframe::M1.next(), Timeframe::M2);
        assert_eq!(Timeframe::M15.next(), Timeframe::M1);
        assert_eq!(Timeframe::M1.prev(), Timeframe::M15);
        for tf in Timeframe::ALL {
            assert_eq!(tf.next().prev(), tf);
        }
    }
}
