//! Derived statistics — pure projection over the visible prefix.
//!
//! Recomputed on every render rather than cached, so the summary can never
//! go stale when the visible count or the underlying series changes.

use crate::domain::Sample;

/// Summary of the visible prefix. All fields are zero for an empty prefix;
/// the UI renders that as "0.00" / "0".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    /// Close of the last visible sample.
    pub last_close: f64,
    /// Volume of the last visible sample.
    pub last_volume: u64,
    /// Maximum high over the visible prefix.
    pub high: f64,
    /// Minimum low over the visible prefix.
    pub low: f64,
}

/// Compute the summary of a visible prefix.
pub fn summarize(visible: &[Sample]) -> Summary {
    let Some(last) = visible.last() else {
        return Summary::default();
    };
    let mut high = f64::NEG_INFINITY;
    let mut low = f64::INFINITY;
    for sample in visible {
        high = high.max(sample.high);
        low = low.min(sample.low);
    }
    Summary {
        last_close: last.close,
        last_volume: last.volume,
        high,
        low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timeframe;
    use chrono::{Duration, TimeZone, Utc};

    fn samples() -> Vec<Sample> {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap();
        let rows = [
            // (open, high, low, close, volume)
            (100.0, 101.5, 99.5, 101.0, 3_000),
            (101.0, 102.8, 100.9, 102.5, 4_500),
            (102.5, 102.6, 98.7, 99.0, 2_200),
        ];
        rows.iter()
            .enumerate()
            .map(|(i, &(open, high, low, close, volume))| Sample {
                timestamp: t0 + Duration::minutes(i as i64),
                open,
                high,
                low,
                close,
                volume,
                timeframe: Timeframe::M1,
            })
            .collect()
    }

    #[test]
    fn empty_prefix_is_zeroed() {
        assert_eq!(summarize(&[]), Summary::default());
        assert_eq!(summarize(&[]).last_close, 0.0);
    }

    #[test]
    fn summary_tracks_last_sample_and_extremes() {
        let samples = samples();
        let summary = summarize(&samples);
        assert_eq!(summary.last_close, 99.0);
        assert_eq!(summary.last_volume, 2_200);
        assert_eq!(summary.high, 102.8);
        assert_eq!(summary.low, 98.7);
    }

    #[test]
    fn summary_follows_a_growing_prefix() {
        let samples = samples();
        let s1 = summarize(&samples[..1]);
        assert_eq!(s1.high, 101.5);
        assert_eq!(s1.low, 99.5);
        let s2 = summarize(&samples[..2]);
        assert_eq!(s2.high, 102.8);
        assert_eq!(s2.last_volume, 4_500);
    }
}
