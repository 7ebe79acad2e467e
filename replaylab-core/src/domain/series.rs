//! Series — an ordered run of samples for one (symbol, timeframe) pair.

use serde::{Deserialize, Serialize};

use crate::domain::{Sample, Timeframe};

/// Ordered OHLCV samples for a single symbol at a single granularity.
///
/// A series is created fresh whenever symbol or timeframe changes and is
/// wholly owned by the playback engine until replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub samples: Vec<Sample>,
}

impl Series {
    /// An empty series, used as the "failed to load" fallback state.
    pub fn empty(symbol: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
            samples: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True if every sample passes the OHLC envelope check, timestamps are
    /// strictly increasing, and each open chains from the prior close.
    pub fn is_coherent(&self) -> bool {
        for (i, sample) in self.samples.iter().enumerate() {
            if !sample.is_sane() || sample.timeframe != self.timeframe {
                return false;
            }
            if i > 0 {
                let prev = &self.samples[i - 1];
                if sample.timestamp <= prev.timestamp || sample.open != prev.close {
                    return false;
                }
            }
        }
        true
    }
}
