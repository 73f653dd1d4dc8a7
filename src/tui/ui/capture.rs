use crate::capture::shake_checks;
use crate::shake::shake_distribution;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{inner, meter};
use super::{bold, draw_status};

pub(super) fn draw_capture(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(4)])
        .split(f.area());
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(3)])
        .split(cols[1]);

    draw_fields(f, cols[0], app);
    draw_result(f, right[0], app);
    draw_log(f, right[1], app);
    draw_status(f, chunks[1], app, "Space throw • ? help • M menu");
}

fn draw_fields(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focused_field();
    let lines: Vec<Line> = app
        .capture_fields()
        .iter()
        .map(|&field| {
            let mut style = Style::default();
            if !field.relevant(&app.capture) {
                style = style.add_modifier(Modifier::DIM);
            }
            let marker = if field == focused {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                "> "
            } else {
                "  "
            };
            Line::from(Span::styled(format!("{marker}{}", field.display(&app.capture)), style))
        })
        .collect();
    let block = Block::default().title("Inputs").borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_result(f: &mut Frame, area: Rect, app: &AppState) {
    let result = app.capture_result();
    let generation = app.capture.generation;
    let checks = shake_checks(generation);
    let colour = match result.capture_percentage {
        p if p >= 50.0 => Color::Green,
        p if p >= 15.0 => Color::Yellow,
        _ => Color::Red,
    };
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Capture chance: "),
            Span::styled(
                format!("{:.2}%", result.capture_percentage),
                Style::default().fg(colour).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Modified rate a: {:.2}   Shake threshold b: {}",
            result.modified_rate, result.shake_threshold
        )),
    ];
    match result.critical_capture_chance {
        Some(crit) => lines.push(Line::from(format!("Critical capture: {:.2}%", crit * 100.0))),
        None if result.is_guaranteed() => lines.push(Line::from("Guaranteed catch")),
        None => {}
    }
    lines.push(Line::from(""));
    lines.push(bold("Shakes before breaking free:"));
    let width = usize::from(inner(area).width.saturating_sub(22)).min(30);
    for (k, p) in shake_distribution(result.shake_threshold, checks).into_iter().enumerate() {
        let label = if k == usize::from(checks) { "caught".to_string() } else { k.to_string() };
        lines.push(Line::from(format!("{label:>7} {} {:>6.2}%", meter(p, width), p * 100.0)));
    }
    let title = format!("{} • {}", generation, app.capture.ball);
    let block = Block::default().title(title).borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_log(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = app.throw_log_page().map(Line::from).collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No throws yet. Press Space.",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    let title = if app.throws == 0 {
        "Throws".to_string()
    } else {
        let rate = f64::from(app.catches) / f64::from(app.throws) * 100.0;
        format!("Throws: {} caught / {} ({rate:.1}%)", app.catches, app.throws)
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
