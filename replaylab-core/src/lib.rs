//! ReplayLab Core — series generation, playback state machine, statistics.
//!
//! This crate contains everything behind the dashboard:
//! - Domain types (samples, timeframes, series)
//! - Symbol catalog (built-in defaults plus TOML configuration)
//! - Deterministic RNG hierarchy (master seed → per-series sub-seeds)
//! - Random-walk OHLCV series generator
//! - Playback engine revealing a series tick by tick
//! - Derived statistics over the visible prefix

pub mod catalog;
pub mod domain;
pub mod generator;
pub mod playback;
pub mod rng;
pub mod stats;
