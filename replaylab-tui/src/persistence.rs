//! App preference persistence — JSON save/load across restarts.
//!
//! Only UI preferences persist (symbol, timeframe, speed, panel). Series
//! data is regenerated every session and never written to disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use replaylab_core::domain::Timeframe;

use crate::app::{AppState, Overlay, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub speed: f64,
    pub active_panel: Panel,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            symbol: "AAPL".to_string(),
            timeframe: Timeframe::M1,
            speed: 1.0,
            active_panel: Panel::Dashboard,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        symbol: app.symbol().ticker.clone(),
        timeframe: app.timeframe,
        speed: app.playback.speed(),
        active_panel: app.active_panel,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut AppState, state: PersistedState) {
    if let Some(idx) = app.generator.catalog().position(&state.symbol) {
        if idx != app.symbol_idx {
            app.select_symbol(idx);
        }
    }
    if state.timeframe != app.timeframe {
        app.select_timeframe(state.timeframe);
    }
    let now = std::time::Instant::now();
    app.playback.set_speed(state.speed, now);
    app.active_panel = state.active_panel;
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
    app.status_message = None;
}
