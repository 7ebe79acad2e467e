//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The playback engine is the only time-driven
//! piece; the event loop feeds it `Instant::now()` once per frame.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use replaylab_core::catalog::SymbolInfo;
use replaylab_core::domain::Timeframe;
use replaylab_core::generator::Generator;
use replaylab_core::playback::Playback;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Dashboard,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Dashboard => 0,
            Panel::Help => 1,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Dashboard),
            1 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 2).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 1) % 2).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    /// Symbol picker with its cursor row.
    SymbolPicker(usize),
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,
    pub overlay: Overlay,

    // Core
    pub generator: Generator,
    pub playback: Playback,
    pub symbol_idx: usize,
    pub timeframe: Timeframe,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,

    // Paths
    pub state_path: PathBuf,
}

impl AppState {
    /// Build the app around a generator, producing the first series for the
    /// given symbol and timeframe.
    pub fn new(
        generator: Generator,
        symbol_idx: usize,
        timeframe: Timeframe,
        state_path: PathBuf,
    ) -> Self {
        let symbol_idx = symbol_idx.min(generator.catalog().len().saturating_sub(1));
        let ticker = generator.catalog().symbols()[symbol_idx].ticker.clone();
        let playback = Playback::new(generator.series(&ticker, timeframe));
        Self {
            active_panel: Panel::Dashboard,
            running: true,
            overlay: Overlay::None,
            generator,
            playback,
            symbol_idx,
            timeframe,
            status_message: None,
            state_path,
        }
    }

    pub fn symbol(&self) -> &SymbolInfo {
        &self.generator.catalog().symbols()[self.symbol_idx]
    }

    /// Switch symbol: regenerate and load, forcing a full playback reset.
    pub fn select_symbol(&mut self, idx: usize) {
        if idx >= self.generator.catalog().len() {
            return;
        }
        self.symbol_idx = idx;
        self.reload_series();
        let ticker = self.symbol().ticker.clone();
        self.set_status(format!("Loaded {ticker} ({})", self.timeframe.label()));
    }

    /// Switch timeframe: regenerate and load, forcing a full playback reset.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
        self.reload_series();
        let (_, total) = self.playback.progress();
        self.set_status(format!(
            "Timeframe {} ({total} samples)",
            self.timeframe.label()
        ));
    }

    fn reload_series(&mut self) {
        let ticker = self.symbol().ticker.clone();
        self.playback
            .load(self.generator.series(&ticker, self.timeframe));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replaylab_core::catalog::Catalog;

    fn test_app() -> AppState {
        let generator = Generator::new(Catalog::default_big7(), 42);
        AppState::new(generator, 0, Timeframe::M1, PathBuf::from("."))
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Dashboard.next(), Panel::Help);
        assert_eq!(Panel::Help.next(), Panel::Dashboard);
        assert_eq!(Panel::Dashboard.prev(), Panel::Help);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..2 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(2).is_none());
    }

    #[test]
    fn starts_on_first_symbol_with_initial_window() {
        let app = test_app();
        assert_eq!(app.symbol().ticker, "AAPL");
        assert_eq!(app.playback.progress(), (50, 1000));
        assert!(!app.playback.is_running());
    }

    #[test]
    fn select_timeframe_resets_playback() {
        let mut app = test_app();
        let t0 = std::time::Instant::now();
        app.playback.play(t0);
        app.playback.advance(t0 + std::time::Duration::from_secs(3));
        app.select_timeframe(Timeframe::M15);
        assert_eq!(app.playback.progress(), (50, 96));
        assert!(!app.playback.is_running());
    }

    #[test]
    fn select_symbol_regenerates_series() {
        let mut app = test_app();
        let aapl_open = app.playback.series().samples[0].open;
        app.select_symbol(5); // NVDA
        assert_eq!(app.symbol().ticker, "NVDA");
        let nvda_open = app.playback.series().samples[0].open;
        assert_ne!(aapl_open, nvda_open);
        assert_eq!(app.playback.progress().0, 50);
    }

    #[test]
    fn out_of_range_symbol_is_ignored() {
        let mut app = test_app();
        app.select_symbol(99);
        assert_eq!(app.symbol().ticker, "AAPL");
    }

    #[test]
    fn switching_back_reproduces_the_same_series() {
        let mut app = test_app();
        let first = app.playback.series().samples[10].close;
        app.select_symbol(3);
        app.select_symbol(0);
        assert_eq!(app.playback.series().samples[10].close, first);
    }
}
