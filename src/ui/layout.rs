//! Layout helpers shared by the wizard views

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rect of `percent_x` by `percent_y` centered in `r`
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_and_centered() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 80, outer);

        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 40);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 5);
    }
}
