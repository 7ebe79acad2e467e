//! Property tests for generator and playback invariants.
//!
//! Uses proptest to verify:
//! 1. Generated series are coherent for any seed — OHLC envelope holds,
//!    opens chain from prior closes, timestamps strictly increase
//! 2. Series length is a fixed function of timeframe
//! 3. Playback advancement follows floor(elapsed / interval), clamped
//! 4. Reset always lands on the initial window, Idle

use std::time::{Duration, Instant};

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use replaylab_core::catalog::Catalog;
use replaylab_core::domain::Timeframe;
use replaylab_core::generator::Generator;
use replaylab_core::playback::{Playback, INITIAL_WINDOW, SPEED_MAX, SPEED_MIN};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_timeframe() -> impl Strategy<Value = Timeframe> {
    prop::sample::select(Timeframe::ALL.to_vec())
}

fn arb_symbol() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "AAPL".to_string(),
        "GOOGL".to_string(),
        "MSFT".to_string(),
        "AMZN".to_string(),
        "TSLA".to_string(),
        "NVDA".to_string(),
        "SPY".to_string(),
        "UNKNOWN".to_string(),
    ])
}

fn arb_speed() -> impl Strategy<Value = f64> {
    (1u32..=100).prop_map(|n| n as f64 / 10.0)
}

fn fixed_series(symbol: &str, timeframe: Timeframe, seed: u64) -> replaylab_core::domain::Series {
    let now = Utc.with_ymd_and_hms(2026, 3, 2, 16, 0, 0).unwrap();
    Generator::new(Catalog::default_big7(), seed).series_at(symbol, timeframe, now)
}

// ── 1 & 2. Generator invariants ──────────────────────────────────────

proptest! {
    /// Every generated series is coherent regardless of seed and symbol:
    /// low <= min(open, close) <= max(open, close) <= high for every
    /// sample, opens chain, timestamps strictly increase.
    #[test]
    fn generated_series_is_coherent(
        seed in any::<u64>(),
        symbol in arb_symbol(),
        timeframe in arb_timeframe(),
    ) {
        let series = fixed_series(&symbol, timeframe, seed);
        prop_assert!(series.is_coherent());
        for sample in &series.samples {
            prop_assert!(sample.low <= sample.open.min(sample.close));
            prop_assert!(sample.open.max(sample.close) <= sample.high);
            prop_assert_eq!(sample.timeframe, timeframe);
        }
    }

    /// Series length is exactly the timeframe's fixed count.
    #[test]
    fn series_length_is_fixed_per_timeframe(
        seed in any::<u64>(),
        timeframe in arb_timeframe(),
    ) {
        let series = fixed_series("AAPL", timeframe, seed);
        prop_assert_eq!(series.len(), timeframe.sample_count());
    }
}

// ── 3. Playback advancement law ──────────────────────────────────────

proptest! {
    /// After `elapsed` ms at speed `s`, the visible count grows by
    /// floor(elapsed / (1000 / s)), clamped to the series length.
    #[test]
    fn advancement_follows_elapsed_over_interval(
        speed in arb_speed(),
        elapsed_ms in 0u64..60_000,
    ) {
        let mut pb = Playback::new(fixed_series("AAPL", Timeframe::M15, 7));
        let t0 = Instant::now();
        pb.set_speed(speed, t0);
        pb.play(t0);
        pb.advance(t0 + Duration::from_millis(elapsed_ms));

        let clamped = speed.clamp(SPEED_MIN, SPEED_MAX);
        let interval_ms = 1000.0 / clamped;
        let expected_ticks = (elapsed_ms as f64 / interval_ms).floor() as usize;
        let len = Timeframe::M15.sample_count();
        let expected = (INITIAL_WINDOW + expected_ticks).min(len);

        let (visible, total) = pb.progress();
        prop_assert_eq!(total, len);
        // Float rounding at exact tick boundaries can land one tick either
        // side of the analytic floor.
        prop_assert!(visible.abs_diff(expected) <= 1);
        prop_assert!(visible <= len);
        prop_assert!(pb.is_running());
    }

    /// Reset lands on min(INITIAL_WINDOW, len) and Idle from any state.
    #[test]
    fn reset_is_total(
        speed in arb_speed(),
        elapsed_ms in 0u64..30_000,
        timeframe in arb_timeframe(),
    ) {
        let mut pb = Playback::new(fixed_series("MSFT", timeframe, 11));
        let t0 = Instant::now();
        pb.set_speed(speed, t0);
        pb.play(t0);
        pb.advance(t0 + Duration::from_millis(elapsed_ms));
        pb.reset();

        let (visible, total) = pb.progress();
        prop_assert_eq!(visible, INITIAL_WINDOW.min(total));
        prop_assert!(!pb.is_running());
    }
}
