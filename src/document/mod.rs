mod content_type;
mod csv;
mod diagnose;
mod docx;
mod loader;
mod pdf;
mod text;

use std::borrow::Cow;

pub use content_type::ContentType;
pub(crate) use content_type::extension_of;
pub use diagnose::{CheckReport, CheckedIssue, DocumentIssue, Severity, diagnose};
pub use loader::{ContentLoader, FsContentLoader};
pub use text::{Decoded, decode_text};

/// One navigable element of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayUnit {
    TextLine { content: String },
    /// `text` is `None` when extraction failed for this page only.
    PdfPage { text: Option<String> },
    DocxParagraph { text: String },
    DocxTableRow { cells: Vec<String> },
    CsvRow { cells: Vec<String> },
}

impl DisplayUnit {
    /// Full text a search matches against, or `None` if the unit is not searchable.
    pub fn searchable_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::TextLine { content } => Some(Cow::Borrowed(content)),
            Self::PdfPage { text } => text.as_deref().map(Cow::Borrowed),
            Self::DocxParagraph { text } => Some(Cow::Borrowed(text)),
            Self::DocxTableRow { cells } | Self::CsvRow { cells } => {
                Some(Cow::Owned(cells.concat()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    Text,
    Csv,
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

/// Which DOCX sub-sequence navigation applies to. Other documents only have
/// [`DocxMode::Paragraphs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocxMode {
    #[default]
    Paragraphs,
    Tables,
}

impl DocxMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Paragraphs => Self::Tables,
            Self::Tables => Self::Paragraphs,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Paragraphs => "paragraphs",
            Self::Tables => "tables",
        }
    }
}

/// Immutable, loaded content of one opened file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    kind: DocumentKind,
    units: Vec<DisplayUnit>,
    table_rows: Vec<DisplayUnit>,
}

impl Document {
    pub fn text(lines: Vec<String>) -> Self {
        Self::single(
            DocumentKind::Text,
            lines
                .into_iter()
                .map(|content| DisplayUnit::TextLine { content })
                .collect(),
        )
    }

    pub fn csv(rows: Vec<Vec<String>>) -> Self {
        Self::single(
            DocumentKind::Csv,
            rows.into_iter()
                .map(|cells| DisplayUnit::CsvRow { cells })
                .collect(),
        )
    }

    pub fn pdf(pages: Vec<Option<String>>) -> Self {
        Self::single(
            DocumentKind::Pdf,
            pages
                .into_iter()
                .map(|text| DisplayUnit::PdfPage { text })
                .collect(),
        )
    }

    pub fn docx(paragraphs: Vec<String>, table_rows: Vec<Vec<String>>) -> Self {
        Self {
            kind: DocumentKind::Docx,
            units: paragraphs
                .into_iter()
                .map(|text| DisplayUnit::DocxParagraph { text })
                .collect(),
            table_rows: table_rows
                .into_iter()
                .map(|cells| DisplayUnit::DocxTableRow { cells })
                .collect(),
        }
    }

    fn single(kind: DocumentKind, units: Vec<DisplayUnit>) -> Self {
        Self {
            kind,
            units,
            table_rows: Vec::new(),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn units(&self, mode: DocxMode) -> &[DisplayUnit] {
        match mode {
            DocxMode::Tables if self.kind == DocumentKind::Docx => &self.table_rows,
            _ => &self.units,
        }
    }

    pub fn len(&self, mode: DocxMode) -> usize {
        self.units(mode).len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty() && self.table_rows.is_empty()
    }

    /// Mode a fresh session starts in: paragraphs unless a DOCX only has tables.
    pub fn initial_mode(&self) -> DocxMode {
        if self.kind == DocumentKind::Docx && self.units.is_empty() && !self.table_rows.is_empty()
        {
            DocxMode::Tables
        } else {
            DocxMode::Paragraphs
        }
    }

    /// Every searchable sequence paired with its mode, in search order.
    pub fn sections(&self) -> Vec<(DocxMode, &[DisplayUnit])> {
        match self.kind {
            DocumentKind::Docx => vec![
                (DocxMode::Paragraphs, self.units.as_slice()),
                (DocxMode::Tables, self.table_rows.as_slice()),
            ],
            _ => vec![(DocxMode::Paragraphs, self.units.as_slice())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayUnit, Document, DocumentKind, DocxMode};

    #[test]
    fn table_rows_search_on_concatenated_cells() {
        let row = DisplayUnit::DocxTableRow {
            cells: vec!["ex".to_string(), "am".to_string()],
        };
        assert_eq!(row.searchable_text().as_deref(), Some("exam"));
    }

    #[test]
    fn failed_pdf_page_is_not_searchable() {
        let page = DisplayUnit::PdfPage { text: None };
        assert!(page.searchable_text().is_none());
    }

    #[test]
    fn non_docx_documents_ignore_tables_mode() {
        let doc = Document::text(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(doc.kind(), DocumentKind::Text);
        assert_eq!(doc.len(DocxMode::Tables), 2);
        assert_eq!(doc.sections().len(), 1);
    }

    #[test]
    fn docx_with_only_tables_starts_in_tables_mode() {
        let doc = Document::docx(Vec::new(), vec![vec!["cell".to_string()]]);
        assert_eq!(doc.initial_mode(), DocxMode::Tables);
        assert_eq!(doc.len(DocxMode::Paragraphs), 0);
        assert_eq!(doc.len(DocxMode::Tables), 1);
    }
}
