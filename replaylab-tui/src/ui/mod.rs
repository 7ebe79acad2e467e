//! Top-level UI layout — dashboard panel stack with status bar.

pub mod chart_panel;
pub mod controls_panel;
pub mod help_panel;
pub mod overlays;
pub mod stats_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    match app.active_panel {
        Panel::Dashboard => draw_dashboard(f, main_area, app),
        Panel::Help => draw_titled(f, main_area, app, Panel::Help, help_panel::render),
    }

    status_bar::render(f, status_area, app);

    // Overlays on top.
    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::SymbolPicker(cursor) => overlays::render_symbol_picker(f, main_area, app, *cursor),
        Overlay::None => {}
    }
}

/// Dashboard: controls strip, price chart, four stat cards.
fn draw_dashboard(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    draw_titled(f, rows[0], app, Panel::Dashboard, controls_panel::render);
    chart_panel::render(f, rows[1], app);
    stats_panel::render(f, rows[2], app);
}

fn draw_titled(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    panel: Panel,
    render: fn(&mut Frame, Rect, &AppState),
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);
    render(f, inner, app);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
