use crate::shiny::GUIDE;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};
use super::{bold, draw_status};

pub(super) fn draw_shiny(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // game and global modifiers
            Constraint::Min(6),    // methods
            Constraint::Length(7), // selected method
            Constraint::Length(4), // status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    draw_methods(f, chunks[1], app);
    draw_details(f, chunks[2], app);
    draw_status(f, chunks[3], app, "←/→ game • G guide • ? help • M menu");
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let form = &app.shiny;
    let charm = if !form.game.has_shiny_charm() {
        "n/a"
    } else if form.charm {
        "Yes"
    } else {
        "No"
    };
    let mut modifiers = vec![format!("Shiny Charm: {charm}")];
    if form.sparkling_applies() {
        modifiers.push(format!("Sparkling Power: {}", form.extra.sparkling));
    }
    if form.research_applies() {
        modifiers.push(format!("Research Level: {}", form.extra.research_level));
    }
    let lines = vec![
        Line::from(vec![
            Span::styled(
                form.game.display_name(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  ({})", form.game.generation())),
        ]),
        Line::from(modifiers.join("   ")),
    ];
    let block = Block::default().title("Shiny Odds").borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_methods(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = app.shiny_rows();
    let selected = app.selected_method().map(|info| info.method);
    let header = Row::new(["Method", "Odds", "Chance", "Rolls"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let body = rows.iter().map(|(info, odds)| {
        let style = if Some(info.method) == selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Row::new([
            info.name.to_string(),
            odds.fraction().to_string(),
            format!("{:.4}%", odds.percentage),
            odds.rolls.to_string(),
        ])
        .style(style)
    });
    let widths = [
        Constraint::Percentage(46),
        Constraint::Percentage(26),
        Constraint::Percentage(16),
        Constraint::Percentage(12),
    ];
    let block = Block::default().title("Methods").borders(Borders::ALL);
    if rows.is_empty() {
        let msg = format!("No shiny methods in {}.", app.shiny.game);
        f.render_widget(Paragraph::new(msg).block(block), area);
        return;
    }
    f.render_widget(Table::new(body, widths).header(header).block(block), area);
}

fn draw_details(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Details").borders(Borders::ALL);
    let Some(info) = app.selected_method() else {
        f.render_widget(block, area);
        return;
    };
    let mut lines = vec![bold(info.name), Line::from(info.description)];
    if !info.inputs.is_empty() {
        let inputs: Vec<String> = info
            .inputs
            .iter()
            .map(|&input| format!("{}: {}", input.label(), app.shiny.input_value(input)))
            .collect();
        lines.push(Line::from(Span::styled(
            inputs.join("   "),
            Style::default().fg(Color::Cyan),
        )));
    }
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

/// Guide overlay. The section covering the selected method is highlighted.
pub(super) fn draw_guide(f: &mut Frame, app: &AppState) {
    let area = centered_rect(80, 85, f.area());
    let selected = app.selected_method().map(|info| info.method);
    let mut lines = Vec::new();
    for section in &GUIDE {
        let current = selected.is_some_and(|m| section.methods.contains(&m));
        let title_style = if current {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(section.title, title_style)));
        lines.push(Line::from(section.body));
        lines.push(Line::from(""));
    }
    let block = Block::default()
        .title("Shiny Hunting Guide")
        .title_bottom(Line::from(" ↑/↓ scroll • G / Esc close ").right_aligned())
        .borders(Borders::ALL);
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).scroll((app.guide_scroll(), 0));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
