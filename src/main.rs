use imgsort::cli::Args;
use imgsort::config::DirConfig;
use imgsort::logging;
use imgsort::session::{Session, Verdict};
use imgsort::tui::{
    handle_confirm_input, handle_edit_input, handle_key_event, render, DirField, EditAction,
    KeyAction, ViewState,
};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Some(ref log_file) = args.log_file {
        if let Err(e) = logging::init_file(log_file) {
            eprintln!("Warning: Failed to open log file: {}", e);
        }
    }

    let session = build_session(&args);

    // Run the app
    run_app(session, args.skip_confirm)
}

/// Loads the persisted directories, applies command line overrides and opens
/// the source directory.
fn build_session(args: &Args) -> Session {
    let mut config = DirConfig::load(&args.config).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}", e);
        DirConfig::default()
    });

    let overridden = args.src_dir.is_some() || args.dst_dir.is_some();
    if let Some(ref src) = args.src_dir {
        config.src_dir = src.clone();
    }
    if let Some(ref dst) = args.dst_dir {
        config.dst_dir = dst.clone();
    }
    if overridden {
        if let Err(e) = config.save(&args.config) {
            eprintln!("Warning: Failed to save config: {}", e);
        }
    }

    tracing::info!(
        src = %config.src_dir.display(),
        dst = %config.dst_dir.display(),
        mode = ?args.delete_mode(),
        "starting session"
    );

    let mut session = Session::new(config, args.config.clone(), args.delete_mode());
    session.open();
    session
}

/// Runs the TUI until the operator quits
fn run_app(mut session: Session, skip_confirm: bool) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_loop(&mut terminal, &mut session, skip_confirm);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let stats = session.stats();
    tracing::info!(
        positive = stats.positive,
        negative = stats.negative,
        deleted = stats.deleted,
        "session ended"
    );

    result
}

/// Main application loop
fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    skip_confirm: bool,
) -> io::Result<()> {
    let mut view_state = ViewState::Browsing;

    loop {
        terminal.draw(|frame| render(frame, session, &view_state))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Windows reports releases too
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Handle overlay-specific input
        match view_state {
            ViewState::Help => {
                // Any key closes help (or toggle with ?)
                view_state = ViewState::Browsing;
                continue;
            }
            ViewState::Summary => {
                // Any key exits from summary
                break;
            }
            ViewState::ConfirmDelete => {
                match handle_confirm_input(key) {
                    KeyAction::ConfirmDelete => {
                        session.delete();
                        view_state = ViewState::Browsing;
                    }
                    KeyAction::CancelDelete => view_state = ViewState::Browsing,
                    _ => {}
                }
                continue;
            }
            ViewState::Editing {
                field,
                ref mut buffer,
            } => {
                match handle_edit_input(key) {
                    EditAction::Insert(c) => buffer.push(c),
                    EditAction::Backspace => {
                        buffer.pop();
                    }
                    EditAction::Commit => {
                        match field {
                            DirField::Source => session.set_src_dir(buffer.as_str()),
                            DirField::Destination => session.set_dst_dir(buffer.as_str()),
                        }
                        view_state = ViewState::Browsing;
                    }
                    EditAction::Cancel => view_state = ViewState::Browsing,
                    EditAction::None => {}
                }
                continue;
            }
            ViewState::Browsing => {}
        }

        match handle_key_event(key) {
            KeyAction::Quit => {
                // Show summary before quitting if anything was sorted
                if session.stats().total() > 0 {
                    view_state = ViewState::Summary;
                } else {
                    break;
                }
            }
            KeyAction::Positive => session.select(Verdict::Positive),
            KeyAction::Negative => session.select(Verdict::Negative),
            KeyAction::Delete => {
                if skip_confirm {
                    session.delete();
                } else if session.cursor().current().is_some() {
                    view_state = ViewState::ConfirmDelete;
                }
            }
            KeyAction::Next => session.next(),
            KeyAction::Previous => session.prev(),
            KeyAction::Refresh => session.refresh(),
            KeyAction::EditSource => {
                view_state = ViewState::Editing {
                    field: DirField::Source,
                    buffer: session.config().src_dir.display().to_string(),
                };
            }
            KeyAction::EditDestination => {
                view_state = ViewState::Editing {
                    field: DirField::Destination,
                    buffer: session.config().dst_dir.display().to_string(),
                };
            }
            KeyAction::Help => view_state = ViewState::Help,
            KeyAction::ConfirmDelete | KeyAction::CancelDelete => {
                // Only handled in ConfirmDelete state
            }
            KeyAction::None => {}
        }
    }

    Ok(())
}
