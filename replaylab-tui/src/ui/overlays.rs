//! Overlay widgets — welcome splash, symbol picker.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to ReplayLab ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Press s to pick a symbol",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Press t to choose a timeframe",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press Space to start playback",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Adjust speed with h / l while it plays",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Symbol picker overlay.
pub fn render_symbol_picker(f: &mut Frame, area: Rect, app: &AppState, cursor: usize) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Select Symbol [j/k]move [Enter]select [Esc]cancel ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();
    for (i, info) in app.generator.catalog().symbols().iter().enumerate() {
        let is_cursor = i == cursor;
        let is_current = i == app.symbol_idx;
        let marker = if is_current { "●" } else { " " };
        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if is_current {
            theme::accent()
        } else {
            theme::muted()
        };
        lines.push(Line::from(Span::styled(
            format!(" {marker} {:<6} {}", info.ticker, info.name),
            style,
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
