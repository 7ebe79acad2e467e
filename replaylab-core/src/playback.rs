//! Playback engine — incremental reveal of a series on a timer.
//!
//! The engine owns the current series and a visible-prefix counter, and
//! advances that counter once per tick while running. Time is passed in
//! explicitly (`Instant` arguments) so behavior is deterministic under
//! test; the event loop supplies `Instant::now()`.
//!
//! There is exactly one pending tick deadline (`next_due`). Every
//! transition that leaves Running, enters Running at a new rate, or
//! replaces the series cancels or reschedules it, so a stale tick can
//! never apply to the wrong session.

use std::time::{Duration, Instant};

use crate::domain::{Sample, Series};

/// Samples shown immediately after a series is loaded or reset.
pub const INITIAL_WINDOW: usize = 50;
/// Speed multiplier bounds: effective tick interval spans 100ms to 10s.
pub const SPEED_MIN: f64 = 0.1;
pub const SPEED_MAX: f64 = 10.0;
/// Slider increment used by the UI.
pub const SPEED_STEP: f64 = 0.1;
/// Tick period at speed 1.0.
const BASE_TICK_MS: f64 = 1000.0;

/// Whether the playback timer is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Idle,
    Running,
}

/// Playback state machine over one owned series.
#[derive(Debug, Clone)]
pub struct Playback {
    series: Series,
    visible: usize,
    speed: f64,
    transport: Transport,
    next_due: Option<Instant>,
}

impl Playback {
    /// Start Idle at the initial window (or the full length if shorter).
    pub fn new(series: Series) -> Self {
        let visible = INITIAL_WINDOW.min(series.len());
        Self {
            series,
            visible,
            speed: 1.0,
            transport: Transport::Idle,
            next_due: None,
        }
    }

    /// Replace the series: full reset to the initial window, forced Idle,
    /// pending tick cancelled.
    pub fn load(&mut self, series: Series) {
        self.visible = INITIAL_WINDOW.min(series.len());
        self.series = series;
        self.transport = Transport::Idle;
        self.next_due = None;
    }

    /// Idle → Running; schedules the first tick one interval from `now`.
    pub fn play(&mut self, now: Instant) {
        if self.transport == Transport::Running {
            return;
        }
        self.transport = Transport::Running;
        self.next_due = Some(now + self.tick_interval());
    }

    /// Running → Idle; cancels the pending tick. Position is kept.
    pub fn pause(&mut self) {
        self.transport = Transport::Idle;
        self.next_due = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        match self.transport {
            Transport::Idle => self.play(now),
            Transport::Running => self.pause(),
        }
    }

    /// Return to the initial window and stop, regardless of current state.
    pub fn reset(&mut self) {
        self.visible = INITIAL_WINDOW.min(self.series.len());
        self.transport = Transport::Idle;
        self.next_due = None;
    }

    /// Clamp the multiplier to [SPEED_MIN, SPEED_MAX]. While running, the
    /// pending tick is rescheduled at the new rate from `now`; the visible
    /// position is untouched.
    pub fn set_speed(&mut self, multiplier: f64, now: Instant) {
        self.speed = multiplier.clamp(SPEED_MIN, SPEED_MAX);
        if self.transport == Transport::Running {
            self.next_due = Some(now + self.tick_interval());
        }
    }

    /// Apply every tick that has elapsed up to `now`. Returns the number of
    /// ticks applied. Past the end of the series, ticks are no-ops but the
    /// engine stays Running.
    pub fn advance(&mut self, now: Instant) -> usize {
        if self.transport != Transport::Running {
            return 0;
        }
        let interval = self.tick_interval();
        let mut ticks = 0;
        while let Some(due) = self.next_due {
            if due > now {
                break;
            }
            self.visible = (self.visible + 1).min(self.series.len());
            self.next_due = Some(due + interval);
            ticks += 1;
        }
        ticks
    }

    /// Effective tick interval: `1000ms / speed`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(BASE_TICK_MS / self.speed / 1000.0)
    }

    pub fn is_running(&self) -> bool {
        self.transport == Transport::Running
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// The visible prefix of the series, for rendering.
    pub fn visible_series(&self) -> &[Sample] {
        &self.series.samples[..self.visible]
    }

    /// (visible, total) for the progress readout.
    pub fn progress(&self) -> (usize, usize) {
        (self.visible, self.series.len())
    }

    /// True once the entire series is revealed.
    pub fn at_end(&self) -> bool {
        self.visible == self.series.len()
    }
}
