//! Sample — the fundamental market data unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Timeframe;

/// One OHLCV record at a single instant, tagged with the granularity of the
/// series it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub timeframe: Timeframe,
}

impl Sample {
    /// Returns true if any OHLC field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// OHLC envelope check: low <= min(open, close) <= max(open, close) <= high,
    /// with positive prices.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > 0.0
            && self.close > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Sample {
        Sample {
            timestamp: Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap(),
            open: 180.0,
            high: 180.9,
            low: 179.4,
            close: 180.6,
            volume: 4_200,
            timeframe: Timeframe::M1,
        }
    }

    #[test]
    fn sample_is_sane() {
        assert!(sample().is_sane());
    }

    #[test]
    fn sample_detects_void() {
        let mut s = sample();
        s.close = f64::NAN;
        assert!(s.is_void());
        assert!(!s.is_sane());
    }

    #[test]
    fn sample_detects_broken_envelope() {
        let mut s = sample();
        s.high = 179.0; // below low
        assert!(!s.is_sane());
    }

    #[test]
    fn sample_serialization_roundtrip() {
        let s = sample();
        let json = serde_json::to_string(&s).unwrap();
        let deser: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(s.timestamp, deser.timestamp);
        assert_eq!(s.close, deser.close);
        assert_eq!(s.timeframe, deser.timeframe);
    }
}
