//! tcounter - Terminal Counter
//!
//! An interactive counter rendered in the terminal. Features include an
//! adjustable step, a rolling history of the last five values, a colour
//! toggle, an independent second counter and a static page layout view.

use std::io;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{error, info};

use tcounter::application::{App, AppMode, Page};
use tcounter::cli::Cli;
use tcounter::infrastructure::{default_log_path, init_logging, resolve_level, Config};
use tcounter::presentation::{help_visible_rows, render_ui, InputHandler};

/// Entry point for the tcounter terminal application.
///
/// Reads arguments and config, sets up logging and the terminal,
/// then runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, logging cannot be
/// set up, or the terminal interface fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let level = resolve_level(cli.log_level.as_deref(), config.log_level.as_deref());
    let log_path = cli
        .log_file
        .clone()
        .or_else(|| config.log_file.clone())
        .unwrap_or_else(default_log_path);
    init_logging(&log_path, level)?;

    let page = cli.page.map(Page::from).unwrap_or(config.start_page);
    info!(?page, log_file = %log_path.display(), "starting tcounter");

    enable_raw_mode()?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = restore_terminal();
            error!(error = %err, "terminal setup failed");
            return Err(err.into());
        }
    };

    let mut app = App::new(config.layout, page);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(count = app.snapshot.count, transitions = app.revision, "tcounter exited");
    report_exit(res)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Undoes raw mode and the alternate screen when setup fails part way.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

/// Turns the event loop result into the process result, once the
/// terminal is back to normal.
fn report_exit(res: io::Result<()>) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = res {
        error!(error = %err, "terminal error");
        return Err(err.into());
    }
    Ok(())
}

/// Main application event loop.
///
/// Redraws from the latest snapshot, then dispatches one key press.
/// Continues running until the user presses 'q' in normal mode.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        app.help_viewport_rows = help_visible_rows(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if matches!(app.mode, AppMode::Normal) => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
