use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub header: Rect,
    pub hint: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect) -> UiLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    UiLayout {
        header: chunks[0],
        hint: chunks[1],
        body: chunks[2],
        status: chunks[3],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{centered_rect, split_layout};

    #[test]
    fn split_layout_gives_the_body_everything_but_three_rows() {
        let layout = split_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.hint.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.body.height, 21);
        assert_eq!(layout.body.y, 2);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn centered_rect_stays_within_area() {
        let area = Rect::new(10, 5, 20, 8);
        assert_eq!(centered_rect(area, 99, 99), area);
        assert_eq!(centered_rect(area, 10, 4), Rect::new(15, 7, 10, 4));
    }
}
