//! Sign-up form TUI
//!
//! A Ratatui-based sign-up form with field validation that posts the
//! completed form as JSON to a remote API.

mod app;
mod config;
mod platform;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use config::FormConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use submission::SubmissionClient;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "signup-form-tui.log";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = FormConfig::load_or_init().unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
        FormConfig::default()
    });
    let base_url = config.resolve_base_url();
    let client = SubmissionClient::new(base_url)?;
    tracing::info!(endpoint = %client.endpoint(), "starting sign-up form");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Arc::new(client));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging() {
    let writer = log_writer(FormConfig::log_dir().as_deref());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signup_form_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
}

/// Log to a file in `dir` so output does not tear the UI, falling back to
/// stderr when there is no usable directory.
fn log_writer(dir: Option<&Path>) -> BoxMakeWriter {
    match dir.and_then(open_log_file) {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    }
}

fn open_log_file(dir: &Path) -> Option<File> {
    fs::create_dir_all(dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up submissions that finished since the last frame
        app.poll_submissions();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while requests are in flight so the indicator clears promptly
        let poll_duration = if app.form.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // crossterm polling blocks this thread; yield so submission tasks make progress
        let has_event = tokio::task::block_in_place(|| event::poll(poll_duration))?;
        if has_event {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
