use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
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
                if key.kind != KeyEventKind::Release && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key press to app input. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.entry_active() {
        let action = match code {
            KeyCode::Esc => InputAction::EntryCancel,
            KeyCode::Enter => InputAction::EntrySubmit,
            KeyCode::Backspace => InputAction::EntryBackspace,
            KeyCode::Char(c) => InputAction::EntryChar(c),
            _ => return false,
        };
        let _ = app.handle_input(action);
        return false;
    }
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if app.guide_open() {
        let delta = match code {
            KeyCode::Up | KeyCode::Char('k') => -1,
            KeyCode::Down | KeyCode::Char('j') => 1,
            KeyCode::PageUp => -10,
            KeyCode::PageDown => 10,
            KeyCode::Esc | KeyCode::Char('g') | KeyCode::Char('G') => {
                let _ = app.handle_input(InputAction::ToggleGuide);
                return false;
            }
            _ => return false,
        };
        let _ = app.handle_input(InputAction::ScrollGuide(delta));
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up | KeyCode::Char('k') => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuSelect);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        },
        Scene::Capture => match code {
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::FieldPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::FieldNext);
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                let _ = app.handle_input(InputAction::FieldInc);
            }
            KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('_') => {
                let _ = app.handle_input(InputAction::FieldDec);
            }
            KeyCode::Char(' ') | KeyCode::Char('t') | KeyCode::Char('T') => {
                let _ = app.handle_input(InputAction::Throw);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::EntryOpen);
            }
            KeyCode::PageUp => {
                let _ = app.handle_input(InputAction::LogUp);
            }
            KeyCode::PageDown => {
                let _ = app.handle_input(InputAction::LogDown);
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                let _ = app.handle_input(InputAction::ClearLog);
            }
            _ => {}
        },
        Scene::Shiny => match code {
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MethodPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MethodNext);
            }
            KeyCode::Right => {
                let _ = app.handle_input(InputAction::GameNext);
            }
            KeyCode::Left => {
                let _ = app.handle_input(InputAction::GamePrev);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::EntryOpen);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                let _ = app.handle_input(InputAction::ToggleCharm);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let _ = app.handle_input(InputAction::CycleSparkling);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let _ = app.handle_input(InputAction::CycleResearch);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let _ = app.handle_input(InputAction::AdjustInput(1));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let _ = app.handle_input(InputAction::AdjustInput(-1));
            }
            KeyCode::Char(']') => {
                let _ = app.handle_input(InputAction::AdjustInput(10));
            }
            KeyCode::Char('[') => {
                let _ = app.handle_input(InputAction::AdjustInput(-10));
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let _ = app.handle_input(InputAction::ToggleLure);
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                let _ = app.handle_input(InputAction::CycleOutbreak);
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                let _ = app.handle_input(InputAction::ToggleShinyParent);
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                let _ = app.handle_input(InputAction::ToggleGuide);
            }
            _ => {}
        },
    }
    false
}
