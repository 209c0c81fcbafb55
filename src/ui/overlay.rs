use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::layout::centered_rect;

pub fn draw_help_overlay(frame: &mut Frame<'_>, area: Rect, lines: &[String]) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let content_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup = centered_rect(area, width, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Keys (any key to close) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let body: Vec<Line<'_>> = lines
        .iter()
        .map(|line| Line::from(format!(" {line}")))
        .collect();
    frame.render_widget(Paragraph::new(body), inner);
}

/// Search prompt drawn over the status row.
pub fn draw_search_prompt(frame: &mut Frame<'_>, area: Rect, input: &str, cursor: usize) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    frame.render_widget(Clear, area);
    let line = build_prompt_line(input, cursor, area.width as usize);
    frame.render_widget(Paragraph::new(line), area);
}

// Software caret; the terminal cursor stays hidden while the pager runs.
fn build_prompt_line(input: &str, cursor: usize, width: usize) -> Line<'static> {
    const PREFIX: &str = "search: ";
    let max_text_width = width.saturating_sub(PREFIX.len());

    let chars: Vec<char> = input.chars().collect();
    let char_count = chars.len();
    let cursor = cursor.min(char_count);

    let start = if max_text_width == 0 {
        char_count
    } else if cursor >= max_text_width {
        cursor.saturating_sub(max_text_width - 1).min(char_count)
    } else {
        0
    };

    let text_width = max_text_width.max(1);
    let end = (start + text_width).min(char_count);
    let mut visible: Vec<char> = chars[start..end].to_vec();
    if visible.len() < text_width {
        visible.extend(std::iter::repeat_n(' ', text_width - visible.len()));
    }

    let caret_idx = cursor
        .saturating_sub(start)
        .min(text_width.saturating_sub(1));

    let mut spans = vec![Span::styled(
        PREFIX.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    for (idx, ch) in visible.into_iter().enumerate() {
        if idx == caret_idx {
            spans.push(Span::styled(
                ch.to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        } else {
            spans.push(Span::raw(ch.to_string()));
        }
    }
    Line::from(spans)
}
