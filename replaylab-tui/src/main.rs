//! ReplayLab TUI — synthetic market playback dashboard.
//!
//! Pick a symbol and timeframe, then replay a generated OHLCV series at
//! adjustable speed while the chart and summary cards update live:
//! - Dashboard — transport controls, price chart, summary cards
//! - Help — keyboard shortcuts

mod app;
mod input;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use replaylab_core::catalog::Catalog;
use replaylab_core::domain::Timeframe;
use replaylab_core::generator::Generator;

use crate::app::AppState;

#[derive(Parser)]
#[command(
    name = "replaylab",
    about = "ReplayLab — seeded synthetic market playback dashboard"
)]
struct Cli {
    /// Master seed for series generation. Defaults to a time-derived seed,
    /// so each session differs unless a seed is pinned.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML symbol catalog. Defaults to the built-in list.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Ticker to start on (e.g. AAPL).
    #[arg(long)]
    symbol: Option<String>,

    /// Timeframe to start on: 1min, 2min, 5min, 15min.
    #[arg(long)]
    timeframe: Option<String>,

    /// Initial speed multiplier (clamped to 0.1–10.0).
    #[arg(long)]
    speed: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Catalog: optional TOML file, built-in defaults on failure.
    let mut catalog_error = None;
    let catalog = match &cli.catalog {
        Some(path) => match Catalog::from_file(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                catalog_error = Some(format!("Catalog fallback: {err}"));
                Catalog::default_big7()
            }
        },
        None => Catalog::default_big7(),
    };

    let seed = cli
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as u64);
    let generator = Generator::new(catalog, seed);

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("replaylab")
        .join("state.json");

    // Load persisted preferences, then let CLI flags override them.
    let persisted = persistence::load(&state_path);
    let mut app = AppState::new(generator, 0, Timeframe::default(), state_path.clone());
    persistence::apply(&mut app, persisted);
    apply_cli_overrides(&mut app, &cli);

    if let Some(msg) = catalog_error {
        app.set_error(msg);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save preferences before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn apply_cli_overrides(app: &mut AppState, cli: &Cli) {
    if let Some(symbol) = &cli.symbol {
        let ticker = symbol.trim().to_uppercase();
        match app.generator.catalog().position(&ticker) {
            Some(idx) => app.select_symbol(idx),
            None => app.set_warning(format!("Unknown symbol {ticker}, using default")),
        }
    }
    if let Some(label) = &cli.timeframe {
        match Timeframe::from_label(label) {
            Some(tf) => app.select_timeframe(tf),
            None => {
                app.select_timeframe(Timeframe::default());
                app.set_warning(format!("Unknown timeframe {label}, using 1min"));
            }
        }
    }
    if let Some(speed) = cli.speed {
        app.playback.set_speed(speed, Instant::now());
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Apply any ticks that elapsed since the last frame.
        app.playback.advance(Instant::now());

        // 2. Render.
        terminal.draw(|f| ui::draw(f, app))?;

        // 3. Poll for input (50ms timeout for ~20 FPS tick).
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit.
        if !app.running {
            break;
        }
    }
    Ok(())
}
