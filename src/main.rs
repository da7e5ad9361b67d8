//! BLOCKTRIS showcase
//!
//! Draws the board, the active piece and the Next preview until the user
//! quits.

use blocktris::bag::Bag;
use blocktris::settings::Settings;
use blocktris::ui::{self, Showcase};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, stdout},
    time::Duration,
};

/// How long to wait for input before redrawing
const FRAME_DURATION: Duration = Duration::from_millis(100);

/// Get the blocktris temp directory, creating it if needed
fn blocktris_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("blocktris");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    let session_id: u32 = rand::random();

    // stdout belongs to the TUI, so logs go to a file
    let log_dir = blocktris_temp_dir();
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blocktris=debug".parse().expect("valid directive")),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "BLOCKTRIS starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let settings = Settings::load();
    let showcase = Showcase::new(&settings, Bag::new());

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &showcase);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("terminal error: {}", e);
    }
    tracing::info!("BLOCKTRIS shutting down");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    showcase: &Showcase,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render_showcase(frame, showcase))?;

        if !event::poll(FRAME_DURATION)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            _ => {}
        }
    }
}
