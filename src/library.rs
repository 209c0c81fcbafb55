//! Subjects (folders) and the notes (files) stored in them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::document::{ContentType, extension_of};
use crate::error::{AppError, AppResult};

/// Extensions accepted by [`Library::upload`].
pub const ALLOWED_FORMATS: [&str; 7] = ["txt", "md", "py", "json", "pdf", "docx", "csv"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub name: String,
    pub size_bytes: u64,
    pub content_type: ContentType,
}

#[derive(Debug, Clone)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    /// Global library at `root`, or the per-user one at `root/<user>`.
    pub fn new(root: impl Into<PathBuf>, user: Option<&str>) -> AppResult<Self> {
        let mut root = root.into();
        if let Some(user) = user.map(str::trim).filter(|user| !user.is_empty()) {
            validate_name(user, "user")?;
            root.push(user);
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Subject names in sorted order. Creates the library root on first use.
    pub fn subjects(&self) -> AppResult<Vec<String>> {
        ensure_dir(&self.root)?;
        let mut subjects = Vec::new();
        for entry in read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                subjects.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        subjects.sort();
        Ok(subjects)
    }

    /// Creates `name` with a `description_<name>.txt` file. Existing subjects
    /// keep their notes; the description is rewritten.
    pub fn create_subject(&self, name: &str, description: &str) -> AppResult<PathBuf> {
        let name = name.trim();
        validate_name(name, "subject")?;

        let dir = self.root.join(name);
        ensure_dir(&dir)?;
        let description_path = dir.join(format!("description_{name}.txt"));
        fs::write(&description_path, description).map_err(|err| {
            AppError::io_with_context(
                err,
                format!("failed to write {}", description_path.display()),
            )
        })?;

        info!(subject = name, "subject created");
        Ok(dir)
    }

    /// Files of `subject` in sorted order.
    pub fn notes(&self, subject: &str) -> AppResult<Vec<NoteEntry>> {
        let dir = self.subject_dir(subject)?;
        if !dir.is_dir() {
            return Err(AppError::invalid_argument(format!(
                "subject '{subject}' does not exist"
            )));
        }

        let mut notes = Vec::new();
        for entry in read_dir(&dir)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            let path = entry.path();
            notes.push(NoteEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                size_bytes: metadata.len(),
                content_type: ContentType::from_path(&path),
            });
        }
        notes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(notes)
    }

    /// Path of `filename` inside `subject`. The file itself may not exist yet.
    pub fn note_path(&self, subject: &str, filename: &str) -> AppResult<PathBuf> {
        validate_name(filename, "file")?;
        Ok(self.subject_dir(subject)?.join(filename))
    }

    /// Copies `source` into `subject`, creating the subject when needed.
    ///
    /// A clashing name gets `_copy`, then `_copy2`, `_copy3` and so on, before
    /// the extension.
    pub fn upload(&self, subject: &str, source: &Path) -> AppResult<PathBuf> {
        if !source.is_file() {
            return Err(AppError::invalid_argument(format!(
                "not a file: {}",
                source.display()
            )));
        }
        let extension = extension_of(source).unwrap_or_default();
        if !ALLOWED_FORMATS.contains(&extension.as_str()) {
            return Err(AppError::unsupported(format!(
                "format '{extension}' cannot be uploaded; allowed: {}",
                ALLOWED_FORMATS.join(", ")
            )));
        }
        let Some(file_name) = source.file_name().and_then(|name| name.to_str()) else {
            return Err(AppError::invalid_argument(format!(
                "file name is not valid UTF-8: {}",
                source.display()
            )));
        };

        let dir = self.subject_dir(subject)?;
        ensure_dir(&dir)?;
        let dest = free_destination(&dir, file_name);
        fs::copy(source, &dest).map_err(|err| {
            AppError::io_with_context(
                err,
                format!("failed to copy {} to {}", source.display(), dest.display()),
            )
        })?;

        info!(subject, dest = %dest.display(), "note uploaded");
        Ok(dest)
    }

    fn subject_dir(&self, subject: &str) -> AppResult<PathBuf> {
        validate_name(subject, "subject")?;
        Ok(self.root.join(subject))
    }
}

fn free_destination(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, extension) = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, format!(".{ext}")),
        _ => (file_name, String::new()),
    };
    let mut attempt = 1u32;
    loop {
        let suffix = if attempt == 1 {
            "_copy".to_string()
        } else {
            format!("_copy{attempt}")
        };
        let candidate = dir.join(format!("{stem}{suffix}{extension}"));
        if !candidate.exists() {
            return candidate;
        }
        attempt += 1;
    }
}

fn validate_name(name: &str, what: &str) -> AppResult<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(AppError::invalid_argument(format!(
            "invalid {what} name '{name}'"
        )));
    }
    Ok(())
}

fn ensure_dir(path: &Path) -> AppResult<()> {
    fs::create_dir_all(path).map_err(|err| {
        AppError::io_with_context(err, format!("failed to create {}", path.display()))
    })
}

fn read_dir(path: &Path) -> AppResult<fs::ReadDir> {
    fs::read_dir(path)
        .map_err(|err| AppError::io_with_context(err, format!("failed to list {}", path.display())))
}
