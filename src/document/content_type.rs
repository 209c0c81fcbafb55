use std::path::Path;

use serde::Serialize;

const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "markdown", "py", "json", "rs", "toml", "yaml", "yml", "ini", "cfg", "log",
    "html", "htm", "css", "js", "ts", "sh", "xml", "tex", "rst",
];

const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "zip", "gz", "tar", "7z", "rar", "exe",
    "dll", "so", "bin", "mp3", "mp4", "wav", "avi", "mov", "xlsx", "pptx",
];

/// How a file's bytes are turned into a [`Document`](super::Document).
///
/// Resolved once when a file is opened; every later decision matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Pdf,
    Docx,
    Csv,
    Binary,
    Unknown,
}

impl ContentType {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match extension_of(path.as_ref()) {
            Some(ext) => Self::from_extension(&ext),
            None => Self::Unknown,
        }
    }

    pub fn from_extension(extension: &str) -> Self {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Self::Pdf,
            "docx" | "doc" => Self::Docx,
            "csv" => Self::Csv,
            _ if TEXT_EXTENSIONS.contains(&ext.as_str()) => Self::Text,
            _ if BINARY_EXTENSIONS.contains(&ext.as_str()) => Self::Binary,
            _ => Self::Unknown,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Csv => "csv",
            Self::Binary => "binary",
            Self::Unknown => "unknown",
        }
    }
}

pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}
