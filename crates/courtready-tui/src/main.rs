//! Court readiness TUI - setup checklist dashboard for event courts.
//!
//! Imports the courts for an event from a setup workbook, then lets an
//! operator walk each court's equipment through not rigged, rigged and
//! tested while keeping a prioritized action list in view.

mod app;
mod config;
mod ui;
mod utils;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use courtready_core::import::{seed_store, workbook, FeedStatus, ImportSummary, SheetNames};
use courtready_core::Session;

use app::{App, AppState};
use config::Config;
use ui::input::handle_input;
use ui::render::render;
use utils::more_line;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Log file name inside the log directory
const LOG_FILE: &str = "courtready.log";

/// Tasks printed per court by `--summary`
const SUMMARY_TASK_COUNT: usize = 4;

const USAGE: &str = "Usage: courtready [WORKBOOK] [--summary] [--json]

  WORKBOOK   Setup workbook (.xlsx); defaults to $COURTREADY_WORKBOOK,
             the config file, then ./data.xlsx
  --summary  Print court readiness and exit
  --json     With --summary, print JSON
";

/// Command line options
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    workbook: Option<PathBuf>,
    summary: bool,
    json: bool,
    help: bool,
}

fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--summary" => parsed.summary = true,
            "--json" => parsed.json = true,
            "-h" | "--help" => parsed.help = true,
            flag if flag.starts_with('-') => bail!("Unknown option: {}\n\n{}", flag, USAGE),
            path => {
                if parsed.workbook.is_some() {
                    bail!("Only one workbook may be given\n\n{}", USAGE);
                }
                parsed.workbook = Some(PathBuf::from(path));
            }
        }
    }
    if parsed.json && !parsed.summary {
        bail!("--json only applies with --summary\n\n{}", USAGE);
    }
    Ok(parsed)
}

/// Daily rolling log file in `log_dir`, creating the directory first
fn log_appender(log_dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE)
        .build(log_dir)
        .with_context(|| format!("Failed to open log file in: {}", log_dir.display()))
}

/// Initialize the tracing subscriber, writing to a log file so the
/// terminal UI is left alone. Falls back to stderr when the log directory
/// is unusable. Keep the guard alive until exit.
fn init_tracing(log_dir: &Path) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_appender(log_dir) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
            warn!(error = ?e, "File logging unavailable, logging to stderr");
            None
        }
    }
}

/// Import courts from the workbook into a fresh session
fn load_session(path: &Path, sheets: &SheetNames) -> Result<(Session, ImportSummary)> {
    let data = workbook::load(path, sheets)
        .with_context(|| format!("Failed to import workbook: {}", path.display()))?;
    let feeds = data.feeds.as_ref().map(|f| f as &dyn FeedStatus);
    let (store, summary) = seed_store(data.kit_rows, feeds);
    Ok((Session::new(store), summary))
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let config = Config::load()?;
    let log_dir = config.log_dir().unwrap_or_else(|_| PathBuf::from("./logs"));
    let _guard = init_tracing(&log_dir);

    let workbook_path =
        config.resolve_workbook(args.workbook, std::env::var(config::WORKBOOK_ENV).ok());
    let sheets = config.sheet_names();
    info!(path = %workbook_path.display(), "Court readiness starting");

    if args.summary {
        let (session, _) = load_session(&workbook_path, &sheets)?;
        return print_summary(&session, args.json);
    }

    // An unreadable workbook still opens the dashboard, empty, with the
    // reason on the status line
    let source_label = workbook_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| workbook_path.display().to_string());
    let mut app = match load_session(&workbook_path, &sheets) {
        Ok((session, summary)) => {
            let mut app = App::new(session, source_label);
            if !summary.duplicates.is_empty() {
                app.status_message = Some(format!(
                    "Skipped duplicate courts: {}",
                    summary.duplicates.join(", ")
                ));
            }
            app
        }
        Err(e) => {
            error!(error = ?e, "Import failed");
            let mut app = App::new(Session::default(), source_label);
            app.status_message = Some(format!("{:#}", e));
            app
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("Court readiness shutting down");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Clear a selection that points at a missing court, then draw
        app.sync_selection();
        terminal.draw(|f| render(f, app))?;

        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                if handle_input(app, key) {
                    return Ok(());
                }
            }
        }

        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}

/// Plain text or JSON readiness report on stdout
fn print_summary(session: &Session, json: bool) -> Result<()> {
    let report = session.report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for court in &report {
        println!(
            "{} ({}) - {}% Ready",
            court.name,
            court.kind.display_name(),
            court.progress
        );
        if court.tasks.is_empty() {
            println!("  Court Complete");
        }
        for task in court.tasks.iter().take(SUMMARY_TASK_COUNT) {
            println!("  • {}", task);
        }
        if let Some(more) = more_line(court.tasks.len(), SUMMARY_TASK_COUNT) {
            println!("  {}", more);
        }
    }
    Ok(())
}
