mod capture;
mod layout;
mod menu;
mod shiny;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

use layout::{centered_rect, inner};

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Capture => capture::draw_capture(f, app),
        Scene::Shiny => shiny::draw_shiny(f, app),
    }
    if app.help_open() {
        draw_help(f, app.scene);
    } else if app.guide_open() {
        shiny::draw_guide(f, app);
    } else if app.entry_active() {
        draw_entry(f, app);
    }
}

fn bold(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
}

/// Two-column status bar: last message on the left, key hints on the right.
fn draw_status(f: &mut Frame, area: Rect, app: &AppState, keys: &str) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));
    let message = match app.status() {
        Some(msg) if app.status_is_error() => {
            Line::from(Span::styled(format!("Error: {msg}"), Style::default().fg(Color::Red)))
        }
        Some(msg) => Line::from(Span::styled(msg, Style::default().fg(Color::Green))),
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(message).wrap(Wrap { trim: true }), cols[0]);
    let hints = Paragraph::new(Line::from(keys)).alignment(Alignment::Right);
    f.render_widget(hints, cols[1]);
}

fn draw_help(f: &mut Frame, scene: Scene) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let mut lines = match scene {
        Scene::Capture => vec![
            bold("Capture:"),
            Line::from("- Up / Down: select field"),
            Line::from("- Left / Right or + / -: adjust value"),
            Line::from("- Enter: type a value (generation, ball, status, numbers)"),
            Line::from("- Space / T: throw a ball"),
            Line::from("- PgUp / PgDn: scroll throw log"),
            Line::from("- X: clear throw log"),
        ],
        _ => vec![
            bold("Shiny Odds:"),
            Line::from("- Up / Down: select method"),
            Line::from("- Left / Right: change game"),
            Line::from("- Enter: type a game name"),
            Line::from("- C: Shiny Charm"),
            Line::from("- S: Sparkling Power level"),
            Line::from("- R: research level (Legends: Arceus)"),
            Line::from("- + / -: chain, combo or KOs by 1"),
            Line::from("- ] / [: chain, combo or KOs by 10"),
            Line::from("- L: lure  O: outbreak  P: shiny parent"),
            Line::from("- G: shiny hunting guide"),
        ],
    };
    lines.extend([
        Line::from(""),
        bold("Entry:"),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("M / Esc: back to menu"),
        Line::from("Close help: ? or Esc"),
    ]);
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let title = match app.scene {
        Scene::Capture => app.focused_field().label(),
        _ => "Game",
    };
    let current = app.entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("> {current}_")),
        Line::from(""),
        Line::from(Span::styled(
            "Enter submit, Esc cancel",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    let block = Block::default().title(title).borders(Borders::ALL);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
