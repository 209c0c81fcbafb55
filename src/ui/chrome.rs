use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::pager::FrameView;

use super::layout::UiLayout;

pub fn draw_chrome(frame: &mut Frame<'_>, layout: UiLayout, view: &FrameView) {
    let header = Paragraph::new(view.header.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, layout.header);

    let hint = Paragraph::new(view.hint.as_str()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, layout.hint);

    let status = Line::from(vec![
        Span::styled(
            format!(" {} ", view.mode.label()),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Span::raw(" "),
        Span::raw(view.status.as_str()),
    ]);
    frame.render_widget(Paragraph::new(status), layout.status);
}
