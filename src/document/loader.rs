use std::fs;
use std::path::Path;

use crate::error::LoadError;

use super::content_type::{ContentType, extension_of};
use super::csv::parse_rows;
use super::docx::read_docx;
use super::pdf::extract_pages;
use super::text::{Decoded, decode_text, lossy_text, split_lines};
use super::Document;

/// Turns a file into a [`Document`]. Implementations must not touch shared
/// state; a failed load leaves nothing behind.
pub trait ContentLoader {
    fn load(&self, path: &Path, content_type: ContentType) -> Result<Document, LoadError>;
}

/// Reads documents straight from the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsContentLoader;

impl ContentLoader for FsContentLoader {
    fn load(&self, path: &Path, content_type: ContentType) -> Result<Document, LoadError> {
        let bytes = read_bytes(path)?;

        let doc = match content_type {
            ContentType::Text => text_document(path, &bytes, true)?,
            ContentType::Unknown => text_document(path, &bytes, false)?,
            ContentType::Csv => Document::csv(parse_rows(&lossy_text(&bytes))?),
            ContentType::Pdf => Document::pdf(extract_pages(path, bytes)?),
            ContentType::Docx => {
                let content = read_docx(bytes)?;
                Document::docx(content.paragraphs, content.table_rows)
            }
            ContentType::Binary => {
                return Err(LoadError::Unsupported {
                    extension: extension_of(path).unwrap_or_default(),
                });
            }
        };

        if doc.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(doc)
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    let metadata = fs::metadata(path).map_err(|err| LoadError::from_io(path, err))?;
    if !metadata.is_file() {
        return Err(LoadError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    if metadata.len() == 0 {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    fs::read(path).map_err(|err| LoadError::from_io(path, err))
}

fn text_document(path: &Path, bytes: &[u8], lossy: bool) -> Result<Document, LoadError> {
    match decode_text(bytes, lossy) {
        Decoded::Text(text) => Ok(Document::text(split_lines(&text))),
        Decoded::Binary { len } => {
            tracing::debug!(
                path = %path.display(),
                extension = extension_of(path).as_deref().unwrap_or(""),
                "content is not text"
            );
            Err(LoadError::Binary {
                path: path.to_path_buf(),
                len,
            })
        }
    }
}
