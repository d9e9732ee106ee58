//! Application runtime: terminal lifecycle, background workers, and the
//! main event loop.
//!
//! All state mutation happens on this loop; the translate worker and the
//! input thread only communicate through channels.

use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::args::Args;
use crate::catalog;
use crate::logic;
use crate::pipeline::{TranslateUpdate, spawn_translate_worker};
use crate::state::AppState;
use crate::ui::ui;

/// Runtime result alias.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Flush the preference store when it has pending changes.
fn maybe_flush_prefs(app: &mut AppState) {
    if !app.prefs_dirty {
        return;
    }
    match crate::prefs::save(&app.prefs_path, &app.prefs) {
        Ok(()) => app.prefs_dirty = false,
        Err(e) => tracing::warn!(error = %e, "failed to persist preferences"),
    }
}

/// Build the startup state from persisted preferences and CLI flags.
fn initial_state(args: &Args) -> AppState {
    let prefs_path = crate::prefs::prefs_path();
    let prefs = crate::prefs::load(&prefs_path);
    let dark_mode = crate::prefs::dark_mode(&prefs);
    let mut app = AppState {
        prefs,
        prefs_path,
        dark_mode,
        ..AppState::default()
    };

    if let Some(from) = args.from.as_deref()
        && catalog::find(from).is_some()
    {
        app.input_lang = from.to_string();
    }
    if let Some(to) = args.to.as_deref()
        && catalog::find(to).is_some()
        && to != catalog::AUTO
    {
        app.output_lang = to.to_string();
    }
    app
}

/// What: Start the tradui TUI runtime and run the main event loop.
///
/// Inputs:
/// - `args`: Parsed command-line flags.
///
/// Details:
/// - Initializes the terminal (raw mode, alternate screen, mouse capture)
/// - Loads persisted preferences; spawns the translate worker, the input
///   polling thread, and the periodic tick
/// - Drives rendering via `ratatui` and delegates input handling to
///   `events`; persists preferences on tick and at shutdown
///
/// Output: `Ok(())` on normal shutdown or an error if initialization fails.
///
/// # Errors
/// - Terminal setup/teardown failures (raw mode, alternate screen).
pub async fn run(args: Args) -> Result<()> {
    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut app = initial_state(&args);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (job_tx, job_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel::<TranslateUpdate>();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();

    spawn_translate_worker(job_rx, update_tx);

    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
            {
                if event_tx.send(ev).is_err() {
                    break;
                }
            }
        }
    });

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });

    // A document passed on the command line behaves like an upload.
    if let Some(path) = args.file.as_deref() {
        match crate::files::load_document(path) {
            Ok(content) => {
                app.document_label = path
                    .file_name()
                    .and_then(std::ffi::OsStr::to_str)
                    .map(str::to_string);
                logic::set_input_text(&mut app, &content);
                logic::send_request(&mut app, &job_tx, true);
            }
            Err(e) => {
                app.modal = crate::state::Modal::Alert { message: e.to_string() };
            }
        }
    }

    loop {
        let _ = terminal.draw(|f| ui(f, &mut app));

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &job_tx) {
                    break;
                }
            }
            Some(update) = update_rx.recv() => {
                logic::apply_update(&mut app, update);
            }
            Some(()) = tick_rx.recv() => {
                logic::expire_toast(&mut app);
                maybe_flush_prefs(&mut app);
            }
            else => break,
        }
    }

    maybe_flush_prefs(&mut app);
    restore_terminal()?;
    Ok(())
}
