//! Controls strip — symbol, timeframe radio row, speed slider, transport.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use replaylab_core::domain::Timeframe;
use replaylab_core::playback::{SPEED_MAX, SPEED_MIN};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    // Symbol line.
    let info = app.symbol();
    lines.push(Line::from(vec![
        Span::styled("Symbol    ", theme::muted()),
        Span::styled(
            format!("{} ", info.ticker),
            theme::accent_bold(),
        ),
        Span::styled(info.name.clone(), theme::text()),
        Span::styled("  [s]change", theme::muted()),
    ]));

    // Timeframe radio row.
    let mut tf_spans: Vec<Span> = vec![Span::styled("Timeframe ", theme::muted())];
    for tf in Timeframe::ALL {
        let selected = tf == app.timeframe;
        let marker = if selected { "●" } else { "○" };
        let style = if selected {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        tf_spans.push(Span::styled(format!("{marker} {} ", tf.label()), style));
    }
    tf_spans.push(Span::styled(" [t/T]cycle", theme::muted()));
    lines.push(Line::from(tf_spans));

    // Speed slider.
    lines.push(speed_slider(app.playback.speed()));

    // Transport + progress badge.
    let (visible, total) = app.playback.progress();
    let transport = if app.playback.is_running() {
        Span::styled("▶ Playing", theme::positive().add_modifier(Modifier::BOLD))
    } else {
        Span::styled("⏸ Paused ", theme::warning())
    };
    lines.push(Line::from(vec![
        Span::styled("Transport ", theme::muted()),
        transport,
        Span::styled("  [Space]play/pause [r]reset  ", theme::muted()),
        Span::styled(format!("{visible} / {total} samples"), theme::neutral()),
    ]));

    f.render_widget(Paragraph::new(lines), area);
}

fn speed_slider(speed: f64) -> Line<'static> {
    let bar_width: usize = 30;
    let frac = (speed - SPEED_MIN) / (SPEED_MAX - SPEED_MIN);
    let filled = (frac * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    Line::from(vec![
        Span::styled("Speed     ", theme::muted()),
        Span::styled(bar, theme::accent()),
        Span::styled(format!(" {speed:.1}x"), theme::text()),
        Span::styled("  [h/l]adjust", theme::muted()),
    ])
}
