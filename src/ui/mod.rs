mod body;
mod chrome;
mod layout;
mod overlay;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::pager::{FrameView, Overlay};

pub use body::draw_body;
pub use chrome::draw_chrome;
pub use layout::{UiLayout, split_layout};
pub use overlay::{draw_help_overlay, draw_search_prompt};

/// Draws a whole pager frame into `area`.
pub fn draw_frame(frame: &mut Frame<'_>, area: Rect, view: &FrameView) {
    let layout = split_layout(area);
    draw_chrome(frame, layout, view);
    draw_body(frame, layout.body, view);

    match &view.overlay {
        Some(Overlay::Help { lines }) => draw_help_overlay(frame, layout.body, lines),
        Some(Overlay::SearchPrompt { input, cursor }) => {
            draw_search_prompt(frame, layout.status, input, *cursor)
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use crate::pager::{FrameRow, FrameView, Overlay, PagerMode, RowStyle};

    use super::draw_frame;

    fn rows_of(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn view(rows: Vec<FrameRow>, end_marker: bool, overlay: Option<Overlay>) -> FrameView {
        FrameView {
            header: "notes.txt | line 2/2".to_string(),
            hint: "j/k move".to_string(),
            rows,
            end_marker,
            status: "ready".to_string(),
            mode: PagerMode::Browsing,
            overlay,
        }
    }

    #[test]
    fn draw_frame_lays_out_header_rows_and_end_marker() {
        let rows = vec![
            FrameRow {
                number: Some(1),
                text: "first".to_string(),
                style: RowStyle::Normal,
            },
            FrameRow {
                number: Some(2),
                text: "second".to_string(),
                style: RowStyle::Cursor,
            },
        ];
        let mut terminal =
            Terminal::new(TestBackend::new(40, 8)).expect("test terminal should initialize");
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_frame(frame, area, &view(rows, true, None));
            })
            .expect("draw should pass");

        let lines = rows_of(terminal.backend().buffer());
        assert!(lines[0].starts_with("notes.txt | line 2/2"));
        assert!(lines[1].starts_with("j/k move"));
        assert!(lines[2].starts_with("1 first"));
        assert!(lines[3].starts_with("2 second"));
        assert!(lines[4].starts_with("(end of document)"));
        assert!(lines[7].contains("BROWSE"));
        assert!(lines[7].contains("ready"));
    }

    #[test]
    fn short_bodies_keep_the_cursor_and_the_end_marker() {
        let rows = (1..=20)
            .map(|n| FrameRow {
                number: Some(n),
                text: format!("line {n}"),
                style: if n == 20 {
                    RowStyle::Cursor
                } else {
                    RowStyle::Normal
                },
            })
            .collect();
        let mut terminal =
            Terminal::new(TestBackend::new(40, 8)).expect("test terminal should initialize");
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_frame(frame, area, &view(rows, true, None));
            })
            .expect("draw should pass");

        let lines = rows_of(terminal.backend().buffer());
        assert!(lines[2].starts_with("17 line 17"));
        assert!(lines[5].starts_with("20 line 20"));
        assert!(lines[6].starts_with("(end of document)"));
    }

    #[test]
    fn draw_frame_shows_search_prompt_on_status_row() {
        let overlay = Overlay::SearchPrompt {
            input: "exam".to_string(),
            cursor: 4,
        };
        let mut terminal =
            Terminal::new(TestBackend::new(40, 6)).expect("test terminal should initialize");
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_frame(frame, area, &view(Vec::new(), false, Some(overlay)));
            })
            .expect("draw should pass");

        let lines = rows_of(terminal.backend().buffer());
        assert!(lines[5].starts_with("search: exam"));
    }

    #[test]
    fn draw_frame_survives_tiny_terminals() {
        let overlay = Overlay::Help {
            lines: vec!["q  close".to_string()],
        };
        let mut terminal =
            Terminal::new(TestBackend::new(3, 2)).expect("test terminal should initialize");
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_frame(frame, area, &view(Vec::new(), true, Some(overlay)));
            })
            .expect("draw should pass");
    }
}
