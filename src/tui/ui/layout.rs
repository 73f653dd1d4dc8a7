use ratatui::layout::Constraint;
use ratatui::prelude::{Direction, Layout, Rect};

/// Area inside a one-cell border; empty when `area` is too small.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let rows = split_middle(Direction::Vertical, percent_y, r);
    split_middle(Direction::Horizontal, percent_x, rows)
}

fn split_middle(direction: Direction, percent: u16, r: Rect) -> Rect {
    let margin = (100 - percent.min(100)) / 2;
    Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Percentage(margin),
            Constraint::Percentage(percent),
            Constraint::Percentage(margin),
        ])
        .split(r)[1]
}

/// Text bar of `width` cells filled in proportion to `fraction`.
pub(super) fn meter(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_of_tiny_area_is_empty() {
        let r = inner(Rect::new(0, 0, 1, 1));
        assert_eq!((r.width, r.height), (0, 0));
    }

    #[test]
    fn meter_fills_proportionally() {
        assert_eq!(meter(0.5, 4), "██░░");
        assert_eq!(meter(2.0, 3), "███");
        assert_eq!(meter(-1.0, 2), "░░");
    }
}
