use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::LoadError;

use super::loader::{ContentLoader, FsContentLoader};
use super::{ContentType, DisplayUnit, DocumentKind, DocxMode};

const SMALL_DOCX_BYTES: u64 = 100;
const LONG_PARAGRAPH_CHARS: usize = 10_000;

/// Problems `diagnose` can detect without modifying the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "kebab-case")]
pub enum DocumentIssue {
    EmptyFile,
    SuspiciouslySmall { bytes: u64 },
    ExtensionMismatch { expected: String },
    Unreadable { reason: String },
    NoText,
    TablesWithoutText,
    LongParagraph { index: usize, chars: usize },
}

impl fmt::Display for DocumentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFile => write!(f, "file is empty (0 bytes)"),
            Self::SuspiciouslySmall { bytes } => {
                write!(f, "file is very small ({bytes} bytes), it may be corrupted")
            }
            Self::ExtensionMismatch { expected } => {
                write!(f, "file does not have a .{expected} extension")
            }
            Self::Unreadable { reason } => write!(f, "document could not be read: {reason}"),
            Self::NoText => write!(f, "document appears to be empty"),
            Self::TablesWithoutText => write!(f, "document has tables but no text content"),
            Self::LongParagraph { index, chars } => write!(
                f,
                "paragraph {} is unusually long ({chars} chars), possible corruption",
                index + 1
            ),
        }
    }
}

/// How badly an issue affects opening the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

const RESAVE: &str = "Open the document in its editor and save it as a new file";
const CONVERT_TO_PDF: &str = "Convert the document to PDF and upload the PDF instead";

impl DocumentIssue {
    /// Issues that point at a damaged file are high; the rest are medium.
    pub fn severity(&self) -> Severity {
        match self {
            Self::SuspiciouslySmall { .. } | Self::Unreadable { .. } | Self::LongParagraph { .. } => {
                Severity::High
            }
            Self::EmptyFile
            | Self::ExtensionMismatch { .. }
            | Self::NoText
            | Self::TablesWithoutText => Severity::Medium,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyFile | Self::NoText => {
                vec!["The note may really be empty; check it in the program that created it".into()]
            }
            Self::SuspiciouslySmall { .. } | Self::LongParagraph { .. } => {
                vec![RESAVE.into(), CONVERT_TO_PDF.into()]
            }
            Self::Unreadable { .. } => vec![
                RESAVE.into(),
                CONVERT_TO_PDF.into(),
                "If the document is password-protected, remove the password first".into(),
            ],
            Self::ExtensionMismatch { expected } => {
                vec![format!("Rename the file to have a .{expected} extension")]
            }
            Self::TablesWithoutText => {
                vec!["The text lives in tables; press Tab in the viewer to browse them".into()]
            }
        }
    }
}

/// Output of `shub check`: the issues with their severity, then the
/// deduplicated repair suggestions in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub issues: Vec<CheckedIssue>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedIssue {
    pub severity: Severity,
    pub message: String,
    pub detail: DocumentIssue,
}

impl CheckReport {
    pub fn new(issues: Vec<DocumentIssue>) -> Self {
        let mut suggestions: Vec<String> = Vec::new();
        for suggestion in issues.iter().flat_map(DocumentIssue::suggestions) {
            if !suggestions.contains(&suggestion) {
                suggestions.push(suggestion);
            }
        }
        let issues = issues
            .into_iter()
            .map(|issue| CheckedIssue {
                severity: issue.severity(),
                message: issue.to_string(),
                detail: issue,
            })
            .collect();
        Self {
            issues,
            suggestions,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks `path` for the common reasons a note fails to open in the pager.
pub fn diagnose(path: &Path, content_type: ContentType) -> Vec<DocumentIssue> {
    let mut issues = Vec::new();

    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(err) => {
            issues.push(DocumentIssue::Unreadable {
                reason: LoadError::from_io(path, err).to_string(),
            });
            return issues;
        }
    };
    if size == 0 {
        issues.push(DocumentIssue::EmptyFile);
        return issues;
    }
    if content_type == ContentType::Docx && size < SMALL_DOCX_BYTES {
        issues.push(DocumentIssue::SuspiciouslySmall { bytes: size });
    }
    if ContentType::from_path(path) != content_type {
        issues.push(DocumentIssue::ExtensionMismatch {
            expected: content_type.id().to_string(),
        });
    }

    let doc = match FsContentLoader.load(path, content_type) {
        Ok(doc) => doc,
        Err(LoadError::Empty { .. }) => {
            issues.push(DocumentIssue::NoText);
            return issues;
        }
        Err(err) => {
            issues.push(DocumentIssue::Unreadable {
                reason: err.to_string(),
            });
            return issues;
        }
    };

    if doc.kind() == DocumentKind::Docx {
        let paragraphs = doc.units(DocxMode::Paragraphs);
        let has_text = paragraphs.iter().any(|unit| {
            matches!(unit, DisplayUnit::DocxParagraph { text } if !text.trim().is_empty())
        });
        let has_tables = doc.len(DocxMode::Tables) > 0;
        match (has_text, has_tables) {
            (false, false) => issues.push(DocumentIssue::NoText),
            (false, true) => issues.push(DocumentIssue::TablesWithoutText),
            _ => {}
        }

        let long = paragraphs.iter().enumerate().find_map(|(index, unit)| match unit {
            DisplayUnit::DocxParagraph { text } => {
                let chars = text.chars().count();
                (chars > LONG_PARAGRAPH_CHARS).then_some(DocumentIssue::LongParagraph { index, chars })
            }
            _ => None,
        });
        issues.extend(long);
    }

    issues
}
