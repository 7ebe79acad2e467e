//! Keyboard input dispatch — overlays → global keys → panel-specific handlers.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use replaylab_core::domain::Timeframe;
use replaylab_core::playback::SPEED_STEP;

use crate::app::{AppState, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    handle_key_at(app, key, Instant::now());
}

/// Handle a key event at an explicit instant (testable).
pub fn handle_key_at(app: &mut AppState, key: KeyEvent, now: Instant) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::SymbolPicker(cursor) => {
            handle_picker_key(app, key, cursor);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Dashboard;
            return;
        }
        KeyCode::Char('2') | KeyCode::Char('?') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Dashboard => handle_dashboard_key(app, key, now),
        Panel::Help => {} // display only
    }
}

fn handle_dashboard_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char(' ') => {
            app.playback.toggle(now);
            if app.playback.is_running() {
                app.set_status(format!("Playing at {:.1}x", app.playback.speed()));
            } else {
                app.set_status("Paused");
            }
        }
        KeyCode::Char('r') => {
            app.playback.reset();
            app.set_status("Reset to initial window");
        }
        KeyCode::Char('s') => {
            app.overlay = Overlay::SymbolPicker(app.symbol_idx);
        }
        KeyCode::Char('t') | KeyCode::Char(']') => {
            app.select_timeframe(app.timeframe.next());
        }
        KeyCode::Char('T') | KeyCode::Char('[') => {
            app.select_timeframe(app.timeframe.prev());
        }
        KeyCode::Char('h') | KeyCode::Left => {
            let speed = app.playback.speed() - SPEED_STEP;
            app.playback.set_speed(speed, now);
            app.set_status(format!("Speed {:.1}x", app.playback.speed()));
        }
        KeyCode::Char('l') | KeyCode::Right => {
            let speed = app.playback.speed() + SPEED_STEP;
            app.playback.set_speed(speed, now);
            app.set_status(format!("Speed {:.1}x", app.playback.speed()));
        }
        _ => {}
    }
}

fn handle_picker_key(app: &mut AppState, key: KeyEvent, cursor: usize) {
    let count = app.generator.catalog().len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.overlay = Overlay::SymbolPicker((cursor + 1) % count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.overlay = Overlay::SymbolPicker((cursor + count - 1) % count);
        }
        KeyCode::Enter => {
            app.overlay = Overlay::None;
            app.select_symbol(cursor);
        }
        _ => {}
    }
}
