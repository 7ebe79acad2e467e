//! Summary cards — current price, volume, high, low over the visible prefix.
//!
//! Recomputed from the visible prefix on every draw; nothing is cached.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use replaylab_core::stats::summarize;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let summary = summarize(app.playback.visible_series());

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    card(
        f,
        cards[0],
        "Current Price",
        format!("${:.2}", summary.last_close),
        theme::text_bold(),
    );
    card(
        f,
        cards[1],
        "Volume",
        format_volume(summary.last_volume),
        theme::text_bold(),
    );
    card(
        f,
        cards[2],
        "High",
        format!("${:.2}", summary.high),
        theme::positive(),
    );
    card(
        f,
        cards[3],
        "Low",
        format!("${:.2}", summary.low),
        theme::negative(),
    );
}

fn card(f: &mut Frame, area: Rect, label: &str, value: String, value_style: Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(label.to_string(), theme::muted())),
        Line::from(Span::styled(value, value_style)),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn format_volume(volume: u64) -> String {
    // Thousands separators, e.g. 1234567 → "1,234,567".
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
