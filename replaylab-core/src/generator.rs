//! Series generator — seeded random-walk OHLCV synthesis.
//!
//! Produces a chained random walk: each sample opens at the prior close,
//! moves by a bounded uniform step scaled to the symbol's base price, and
//! grows high/low wicks beyond the open/close envelope. Volume is drawn
//! independently per sample. Timestamps run backward from "now" at one
//! minute per index, so the last sample is the most recent.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::catalog::Catalog;
use crate::domain::{Sample, Series, Timeframe};
use crate::rng::Seeder;

/// Open→close step bound, as a fraction of the base price.
const STEP_FRACTION: f64 = 0.005;
/// High/low wick extension bound beyond the open/close envelope.
const WICK_FRACTION: f64 = 0.003;
/// Per-sample volume range.
const VOLUME_MIN: u64 = 1_000;
const VOLUME_MAX: u64 = 11_000;
/// Closes are floored at this fraction of the base price so a long walk
/// cannot reach zero or below.
const PRICE_FLOOR_FRACTION: f64 = 0.01;

/// Seeded series factory over a symbol catalog.
///
/// Pure given (catalog, master seed, now): the same inputs always produce
/// the same series, and generating has no side effects.
#[derive(Debug, Clone)]
pub struct Generator {
    catalog: Catalog,
    seeds: Seeder,
}

impl Generator {
    pub fn new(catalog: Catalog, master_seed: u64) -> Self {
        Self {
            catalog,
            seeds: Seeder::new(master_seed),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn master_seed(&self) -> u64 {
        self.seeds.master_seed()
    }

    /// Generate the series for a (symbol, timeframe) pair, timestamped
    /// backward from the current instant.
    pub fn series(&self, symbol: &str, timeframe: Timeframe) -> Series {
        self.series_at(symbol, timeframe, Utc::now())
    }

    /// Generate with an explicit "now" for reproducible timestamps.
    pub fn series_at(&self, symbol: &str, timeframe: Timeframe, now: DateTime<Utc>) -> Series {
        let base = self.catalog.base_price(symbol);
        let count = timeframe.sample_count();
        let mut rng = self.seeds.rng_for(symbol, timeframe);

        let mut samples = Vec::with_capacity(count);
        let mut prev_close = base;
        for i in 0..count {
            let timestamp = now - Duration::minutes((count - i) as i64);
            let open = prev_close;
            let step = rng.gen_range(-1.0..=1.0) * base * STEP_FRACTION;
            let close = (open + step).max(base * PRICE_FLOOR_FRACTION);
            let high = open.max(close) + rng.gen_range(0.0..=1.0) * base * WICK_FRACTION;
            let low = open.min(close) - rng.gen_range(0.0..=1.0) * base * WICK_FRACTION;
            let volume = rng.gen_range(VOLUME_MIN..VOLUME_MAX);

            samples.push(Sample {
                timestamp,
                open,
                high,
                low,
                close,
                volume,
                timeframe,
            });
            prev_close = close;
        }

        Series {
            symbol: symbol.to_string(),
            timeframe,
            samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 16, 0, 0).unwrap()
    }

    fn generator() -> Generator {
        Generator::new(Catalog::default_big7(), 42)
    }

    #[test]
    fn series_length_matches_timeframe() {
        let gen = generator();
        for tf in Timeframe::ALL {
            let series = gen.series_at("AAPL", tf, fixed_now());
            assert_eq!(series.len(), tf.sample_count());
        }
    }

    #[test]
    fn series_is_coherent_for_all_symbols() {
        let gen = generator();
        for info in gen.catalog().symbols() {
            let series = gen.series_at(&info.ticker, Timeframe::M15, fixed_now());
            assert!(series.is_coherent(), "incoherent series for {}", info.ticker);
        }
    }

    #[test]
    fn first_open_is_base_price() {
        let gen = generator();
        let series = gen.series_at("AAPL", Timeframe::M1, fixed_now());
        assert_eq!(series.samples[0].open, 180.0);
        let series = gen.series_at("NVDA", Timeframe::M1, fixed_now());
        assert_eq!(series.samples[0].open, 880.0);
    }

    #[test]
    fn unknown_symbol_uses_default_base() {
        let gen = generator();
        let series = gen.series_at("ZZZZ", Timeframe::M5, fixed_now());
        assert_eq!(series.samples[0].open, crate::catalog::DEFAULT_BASE_PRICE);
        assert_eq!(series.len(), Timeframe::M5.sample_count());
    }

    #[test]
    fn last_sample_is_one_minute_before_now() {
        let gen = generator();
        let now = fixed_now();
        let series = gen.series_at("AAPL", Timeframe::M2, now);
        let last = series.samples.last().unwrap();
        assert_eq!(last.timestamp, now - Duration::minutes(1));
        let first = &series.samples[0];
        assert_eq!(
            first.timestamp,
            now - Duration::minutes(Timeframe::M2.sample_count() as i64)
        );
    }

    #[test]
    fn same_seed_reproduces_series() {
        let a = generator().series_at("TSLA", Timeframe::M5, fixed_now());
        let b = generator().series_at("TSLA", Timeframe::M5, fixed_now());
        assert_eq!(a.samples.len(), b.samples.len());
        for (x, y) in a.samples.iter().zip(&b.samples) {
            assert_eq!(x.close, y.close);
            assert_eq!(x.volume, y.volume);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = Generator::new(Catalog::default_big7(), 1).series_at(
            "TSLA",
            Timeframe::M5,
            fixed_now(),
        );
        let b = Generator::new(Catalog::default_big7(), 2).series_at(
            "TSLA",
            Timeframe::M5,
            fixed_now(),
        );
        assert!(a.samples.iter().zip(&b.samples).any(|(x, y)| x.close != y.close));
    }

    #[test]
    fn volume_in_range() {
        let series = generator().series_at("SPY", Timeframe::M1, fixed_now());
        assert!(series
            .samples
            .iter()
            .all(|s| (VOLUME_MIN..VOLUME_MAX).contains(&s.volume)));
    }
}
