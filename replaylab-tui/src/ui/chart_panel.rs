//! Price chart — braille line chart of the visible close prices.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use replaylab_core::domain::Sample;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let title = format!(
        " Price Chart — {} {} ",
        app.symbol().ticker,
        app.timeframe.label()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(title)
        .title_style(theme::panel_title(true));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible = app.playback.visible_series();
    if visible.is_empty() {
        render_empty(f, inner);
    } else {
        render_chart(f, inner, visible);
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Failed to load data — the series is empty.",
            theme::warning(),
        )),
        Line::from(Span::styled(
            "Press s to pick a symbol or t to change timeframe.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_chart(f: &mut Frame, area: Rect, visible: &[Sample]) {
    let min_y = visible.iter().map(|s| s.low).fold(f64::INFINITY, f64::min);
    let max_y = visible
        .iter()
        .map(|s| s.high)
        .fold(f64::NEG_INFINITY, f64::max);

    let padding = (max_y - min_y).abs().max(1.0) * 0.05;
    let y_min = min_y - padding;
    let y_max = max_y + padding;
    let x_max = visible.len().saturating_sub(1) as f64;

    // Visible closes as (index, price) points.
    let data: Vec<(f64, f64)> = visible
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.close))
        .collect();

    let dataset = Dataset::default()
        .name("close")
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::ACCENT))
        .graph_type(GraphType::Line)
        .data(&data);

    let first_label = visible[0].timestamp.format("%H:%M").to_string();
    let last_label = visible[visible.len() - 1]
        .timestamp
        .format("%H:%M")
        .to_string();

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .title(Span::styled("Time", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first_label, theme::muted()),
                    Span::styled(last_label, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Price", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.2}"), theme::muted()),
                    Span::styled(format!("{y_max:.2}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}
