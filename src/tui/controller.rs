use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.agents_on_turn();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    let help_toggle = matches!(code, KeyCode::Char('?'));
    let history_toggle = matches!(code, KeyCode::Char('h') | KeyCode::Char('H'));
    if help_toggle {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if history_toggle {
        let _ = app.handle_input(InputAction::ToggleHistory);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if app.history_open() {
        match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
            _ => {}
        }
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char(' ') => {
                let _ = app.handle_input(InputAction::NewDeal);
            }
            KeyCode::Right | KeyCode::Char(']') => {
                let _ = app.handle_input(InputAction::ChoiceNext);
            }
            KeyCode::Left | KeyCode::Char('[') => {
                let _ = app.handle_input(InputAction::ChoicePrev);
            }
            KeyCode::Enter => {
                if app.handle_input(InputAction::Submit) {
                    app.agents_on_turn();
                }
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                if app.handle_input(InputAction::Pass) {
                    app.agents_on_turn();
                }
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                let _ = app.handle_input(InputAction::Hint);
            }
            _ => {}
        },
    }
    false
}
