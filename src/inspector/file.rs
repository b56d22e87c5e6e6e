use std::fs;
use std::path::{MAIN_SEPARATOR, Path};

use serde::Serialize;

use crate::counter::{LineStats, count_lines};
use crate::error::{LangFileError, Result};
use crate::language;

/// Inspection result for a single file.
///
/// `language` is empty when the extension is not registered. Downstream
/// aggregation tests for emptiness, so this stays a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub name: String,
    pub language: String,
    pub size_bytes: u64,
    pub lines: LineStats,
}

/// Inspects a file eagerly on construction and holds the resulting record.
#[derive(Debug, Clone)]
pub struct FileInspector {
    path: String,
    record: FileRecord,
}

impl FileInspector {
    /// Stat, read, and classify the file at `path`.
    ///
    /// # Errors
    /// Returns `FileNotFound` if nothing exists at `path`, or `ReadFailure`
    /// if the existence probe, metadata, or content read fails.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();

        match Path::new(&path).try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(LangFileError::FileNotFound { path }),
            Err(source) => return Err(LangFileError::ReadFailure { path, source }),
        }

        let record = Self::inspect(&path)?;
        tracing::debug!(
            path = %path,
            language = %record.language,
            size = record.size_bytes,
            total = record.lines.total,
            code = record.lines.code,
            "inspected file"
        );

        Ok(Self { path, record })
    }

    fn inspect(path: &str) -> Result<FileRecord> {
        let read_failure = |source| LangFileError::ReadFailure {
            path: path.to_string(),
            source,
        };

        let metadata = fs::metadata(path).map_err(read_failure)?;
        let bytes = fs::read(path).map_err(read_failure)?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(FileRecord {
            name: Self::name_of(path).to_string(),
            language: Self::language_of(path).to_string(),
            size_bytes: metadata.len(),
            lines: count_lines(&content),
        })
    }

    /// The path exactly as given to [`FileInspector::new`].
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn info(&self) -> &FileRecord {
        &self.record
    }

    #[must_use]
    pub fn into_info(self) -> FileRecord {
        self.record
    }

    /// Segment after the last path separator.
    #[must_use]
    pub fn name_of(path: &str) -> &str {
        path.rsplit(MAIN_SEPARATOR).next().unwrap_or(path)
    }

    /// `"."` followed by whatever follows the last `.` in `path`.
    ///
    /// A path without any `.` yields `"."` plus the whole path, which never
    /// matches a registered extension.
    #[must_use]
    pub fn extension_of(path: &str) -> String {
        let last = path.rsplit('.').next().unwrap_or(path);
        format!(".{last}")
    }

    /// Language registered for the extension of `path`, or `""`.
    #[must_use]
    pub fn language_of(path: &str) -> &'static str {
        language::resolve(&Self::extension_of(path))
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
