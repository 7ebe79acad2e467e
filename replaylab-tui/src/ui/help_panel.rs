//! Help panel — keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1 / 2", "Switch to Dashboard / Help");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Playback");
    key(&mut lines, "Space", "Play / pause");
    key(&mut lines, "r", "Reset to the initial 50-sample window");
    key(&mut lines, "h / l", "Speed down / up (0.1x steps, 0.1x–10.0x)");
    lines.push(Line::from(""));

    section(&mut lines, "Data Selection");
    key(&mut lines, "s", "Open the symbol picker (j/k move, Enter select, Esc cancel)");
    key(&mut lines, "t / T", "Next / previous timeframe (1min, 2min, 5min, 15min)");
    lines.push(Line::from(""));

    section(&mut lines, "Notes");
    key(
        &mut lines,
        "",
        "Changing symbol or timeframe regenerates the series and stops playback.",
    );
    key(
        &mut lines,
        "",
        "Series are synthetic: a seeded random walk, reproducible per seed.",
    );
    key(
        &mut lines,
        "",
        "Run with --seed N for a reproducible session; --catalog FILE for custom symbols.",
    );

    f.render_widget(Paragraph::new(lines), area);
}

fn section(lines: &mut Vec<Line>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key(lines: &mut Vec<Line>, binding: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {binding:<16}"), theme::neutral()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
