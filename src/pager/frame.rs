use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::document::{DisplayUnit, DocumentKind, DocxMode};
use crate::input::{help_lines, hint_line};

use super::core::Pager;
use super::nav::viewport_window;
use super::state::PagerMode;

const CSV_CELL_MAX_WIDTH: usize = 30;
const CSV_COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Normal,
    Highlighted,
    Cursor,
    /// Placeholder text standing in for missing content.
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    /// 1-based unit or line number; `None` for notices.
    pub number: Option<usize>,
    pub text: String,
    pub style: RowStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Help { lines: Vec<String> },
    SearchPrompt { input: String, cursor: usize },
}

/// Everything a renderer needs for one frame, detached from the pager state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub header: String,
    pub hint: String,
    pub rows: Vec<FrameRow>,
    pub end_marker: bool,
    pub status: String,
    pub mode: PagerMode,
    pub overlay: Option<Overlay>,
}

impl Pager {
    pub fn frame_view(&self) -> FrameView {
        let state = self.state();
        let kind = self.document().kind();
        let len = self.document().len(state.docx_mode);

        let rows = match kind {
            DocumentKind::Pdf => self.pdf_rows(),
            _ => self.unit_rows(),
        };

        let overlay = match state.mode {
            PagerMode::Help => Some(Overlay::Help {
                lines: help_lines(self.keymap()),
            }),
            PagerMode::SearchInput => Some(Overlay::SearchPrompt {
                input: state.search_input.value().to_string(),
                cursor: state.search_input.cursor(),
            }),
            PagerMode::Browsing | PagerMode::Terminal => None,
        };

        FrameView {
            header: self.header(len),
            hint: hint_line(self.keymap(), kind),
            rows,
            end_marker: len > 0 && state.cursor + 1 == len,
            status: state.status.message.clone(),
            mode: state.mode,
            overlay,
        }
    }

    fn header(&self, len: usize) -> String {
        let state = self.state();
        let unit = match (self.document().kind(), state.docx_mode) {
            (DocumentKind::Text, _) => "line",
            (DocumentKind::Csv, _) => "row",
            (DocumentKind::Pdf, _) => "page",
            (DocumentKind::Docx, DocxMode::Paragraphs) => "paragraph",
            (DocumentKind::Docx, DocxMode::Tables) => "table row",
        };
        let position = if len == 0 { 0 } else { state.cursor + 1 };
        let mut header = format!("{} | {unit} {position}/{len}", self.name());

        if self.document().kind() == DocumentKind::Docx {
            header.push_str(&format!(" | {}", state.docx_mode.label()));
        }
        if let Some(term) = state.search.term.as_deref() {
            let total = state.search.results.len();
            if total == 0 {
                header.push_str(&format!(" | '{term}': no results"));
            } else {
                header.push_str(&format!(
                    " | '{term}': {}/{total}",
                    state.search.cursor + 1
                ));
            }
        }
        header
    }

    fn unit_rows(&self) -> Vec<FrameRow> {
        let state = self.state();
        let units = self.document().units(state.docx_mode);
        let window = viewport_window(state.cursor, state.viewport_size, units.len());
        let widths = match self.document().kind() {
            DocumentKind::Csv => csv_column_widths(units),
            _ => Vec::new(),
        };

        window
            .map(|index| {
                let style = if index == state.cursor {
                    RowStyle::Cursor
                } else if state.highlighted.contains(&index) {
                    RowStyle::Highlighted
                } else {
                    RowStyle::Normal
                };
                FrameRow {
                    number: Some(index + 1),
                    text: unit_text(&units[index], &widths),
                    style,
                }
            })
            .collect()
    }

    fn pdf_rows(&self) -> Vec<FrameRow> {
        let state = self.state();
        let units = self.document().units(DocxMode::Paragraphs);
        let notice = |text: &str| {
            vec![FrameRow {
                number: None,
                text: text.to_string(),
                style: RowStyle::Notice,
            }]
        };

        match units.get(state.cursor) {
            Some(DisplayUnit::PdfPage { text: Some(text) }) if text.trim().is_empty() => {
                notice("no text on this page (image-only?)")
            }
            Some(DisplayUnit::PdfPage { text: Some(text) }) => text
                .lines()
                .enumerate()
                .skip(state.page_scroll)
                .take(state.viewport_size)
                .map(|(line, content)| FrameRow {
                    number: Some(line + 1),
                    text: content.to_string(),
                    style: RowStyle::Normal,
                })
                .collect(),
            Some(DisplayUnit::PdfPage { text: None }) => {
                notice("text extraction failed for this page")
            }
            _ => Vec::new(),
        }
    }
}

fn unit_text(unit: &DisplayUnit, widths: &[usize]) -> String {
    match unit {
        DisplayUnit::TextLine { content } => content.clone(),
        DisplayUnit::DocxParagraph { text } => text.clone(),
        DisplayUnit::DocxTableRow { cells } => cells.join(" | "),
        DisplayUnit::CsvRow { cells } => align_cells(cells, widths),
        DisplayUnit::PdfPage { text } => text.clone().unwrap_or_default(),
    }
}

fn csv_column_widths(units: &[DisplayUnit]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for unit in units {
        let DisplayUnit::CsvRow { cells } = unit else {
            continue;
        };
        for (column, cell) in cells.iter().enumerate() {
            let width = cell.width().min(CSV_CELL_MAX_WIDTH);
            match widths.get_mut(column) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width),
            }
        }
    }
    widths
}

fn align_cells(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (column, cell) in cells.iter().enumerate() {
        if column > 0 {
            line.push_str(CSV_COLUMN_GAP);
        }
        let cell = truncate_cell(cell, CSV_CELL_MAX_WIDTH);
        let width = cell.width();
        line.push_str(&cell);
        let target = widths.get(column).copied().unwrap_or(width);
        if column + 1 < cells.len() {
            line.extend(std::iter::repeat_n(' ', target.saturating_sub(width)));
        }
    }
    line
}

/// Cuts `cell` at a grapheme boundary so it fits in `max_width` columns,
/// marking the cut with an ellipsis.
fn truncate_cell(cell: &str, max_width: usize) -> String {
    if cell.width() <= max_width {
        return cell.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for grapheme in cell.graphemes(true) {
        let width = grapheme.width();
        if used + width + 1 > max_width {
            break;
        }
        out.push_str(grapheme);
        used += width;
    }
    out.push('…');
    out
}
