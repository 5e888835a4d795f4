use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::rc::Rc;

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Three equal bands along `direction`.
pub(super) fn thirds(area: Rect, direction: Direction) -> Rc<[Rect]> {
    Layout::default()
        .direction(direction)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
        .split(area)
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let rows = thirds_with(r, Direction::Vertical, percent_y);
    thirds_with(rows[1], Direction::Horizontal, percent_x)[1]
}

fn thirds_with(area: Rect, direction: Direction, middle_percent: u16) -> Rc<[Rect]> {
    let side = (100 - middle_percent.min(100)) / 2;
    Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(middle_percent),
            Constraint::Percentage(side),
        ])
        .split(area)
}
