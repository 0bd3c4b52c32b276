// stackviz: animated stack visualizer for the terminal

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use stackviz::clock::SystemClock;
use stackviz::config::Config;
use stackviz::input::CrosstermKeys;
use stackviz::{logging, ui::App};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> stackviz::Result<()> {
    let config = Config::load()?;
    let _log_guard = logging::init(&config.logging)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // Create and run app
    let mut app = App::new(terminal, CrosstermKeys, SystemClock, config);
    let res = app.run();

    // Restore terminal even when the loop failed
    let mut terminal = app.into_screen();
    let restored = restore(&mut terminal);

    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }
    finish(res, restored)?;
    Ok(())
}

/// Undo the terminal setup. Every step runs; the first failure is returned.
fn restore(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

/// Result of the session: a loop error wins over a teardown error
fn finish(res: io::Result<()>, restored: io::Result<()>) -> io::Result<()> {
    if let (Err(_), Err(err)) = (&res, &restored) {
        tracing::warn!(error = %err, "terminal restore failed");
    }
    res.and(restored)
}
