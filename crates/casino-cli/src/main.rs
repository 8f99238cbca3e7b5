//! `casino` — terminal UI for booking cafeteria lunches.
//!
//! # Usage
//!
//! ```
//! casino --menu menu.toml --meal-type vegetarian
//! casino --config ~/.config/casino/config.toml
//! ```

mod app;
mod config;
mod ui;

use std::{fs::OpenOptions, io, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use app::App;
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use config::{Args, ConfigFile, Settings};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::load(path)?,
    None => ConfigFile::default(),
  };
  let settings = Settings::resolve(args, file_cfg);

  // The terminal belongs to the UI, so logs go to a file.
  let log_file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(&settings.log_file)
    .with_context(|| format!("opening log file {}", settings.log_file.display()))?;
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(Mutex::new(log_file))
    .with_ansi(false)
    .init();

  let menu = settings.load_menu()?;
  tracing::info!(
    weeks = menu.weeks.len(),
    meal_type = %settings.meal_type,
    "starting casino"
  );

  let mut app = App::new(menu, settings.meal_type, wall_clock());

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app);

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  if let Err(e) = &run_result {
    tracing::error!(error = %e, "event loop failed");
  }
  run_result
}

/// Local wall-clock time; the only place the clock is read.
fn wall_clock() -> NaiveDateTime { Local::now().naive_local() }

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    let now = wall_clock();
    terminal.draw(|f| ui::draw(f, app, now)).context("drawing frame")?;

    // Redraw at least once a second so the eligibility window follows the
    // clock even without input.
    if !event::poll(Duration::from_millis(1000)).context("polling for input")? {
      continue;
    }

    match event::read().context("reading input")? {
      Event::Key(key) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key, wall_clock()) {
          break;
        }
      }
      // Terminal will redraw on next iteration.
      Event::Resize(_, _) => {}
      _ => {}
    }
  }

  Ok(())
}
