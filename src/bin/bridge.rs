use bridge_rs::tui::{app::AppState, controller};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

const LOG_PATH_ENV: &str = "BRIDGE_RS_LOG";
const DEFAULT_LOG_PATH: &str = "bridge-rs.log";

/// Log to a file; the terminal belongs to the table. Logging stays off if the
/// file cannot be created.
fn init_logging() {
    let path = std::env::var(LOG_PATH_ENV).unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = simplelog::WriteLogger::init(log::LevelFilter::Debug, config, file);
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "bridge-rs needs a real terminal (TTY).\nRun it in a terminal and press q to quit. Version: {}",
            bridge_rs::VERSION
        );
        return Ok(());
    }
    init_logging();
    log::info!("bridge-rs {} starting", bridge_rs::VERSION);
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let mut app = AppState::default();

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
