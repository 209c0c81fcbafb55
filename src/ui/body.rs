use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::pager::{FrameRow, FrameView, RowStyle};

const TAB_WIDTH: usize = 4;
const END_MARKER: &str = "(end of document)";

pub fn draw_body(frame: &mut Frame<'_>, area: Rect, view: &FrameView) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let gutter = view
        .rows
        .iter()
        .filter_map(|row| row.number)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(0);

    let height = usize::from(area.height);
    let show_marker = view.end_marker && height > 1;
    let rows = fit_rows(&view.rows, height - usize::from(show_marker));

    let mut lines: Vec<Line<'_>> = rows.iter().map(|row| row_line(row, gutter)).collect();
    if show_marker {
        lines.push(Line::from(Span::styled(
            END_MARKER,
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// The part of `rows` that fits in `capacity` lines, keeping the cursor row
/// on screen.
fn fit_rows(rows: &[FrameRow], capacity: usize) -> &[FrameRow] {
    if rows.len() <= capacity {
        return rows;
    }
    let cursor = rows
        .iter()
        .position(|row| row.style == RowStyle::Cursor)
        .unwrap_or(0);
    let start = cursor
        .saturating_sub(capacity / 2)
        .min(rows.len() - capacity);
    &rows[start..start + capacity]
}

fn row_line(row: &FrameRow, gutter: usize) -> Line<'static> {
    let number = match row.number {
        Some(n) => format!("{n:>gutter$} "),
        None if gutter > 0 => " ".repeat(gutter + 1),
        None => String::new(),
    };

    let text_style = match row.style {
        RowStyle::Normal => Style::default(),
        RowStyle::Highlighted => Style::default().fg(Color::Black).bg(Color::Yellow),
        RowStyle::Cursor => Style::default().add_modifier(Modifier::REVERSED),
        RowStyle::Notice => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    };

    Line::from(vec![
        Span::styled(number, Style::default().fg(Color::DarkGray)),
        Span::styled(expand_tabs(&row.text), text_style),
    ])
}

pub(crate) fn expand_tabs(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + TAB_WIDTH);
    let mut column = 0usize;
    for ch in text.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}
