use serde::Serialize;

use crate::error::LangFileError;
use crate::inspector::FileRecord;

/// A path that could not be inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionFailure {
    pub path: String,
    pub error_type: String,
    pub message: String,
}

impl InspectionFailure {
    #[must_use]
    pub fn new(path: &str, error: &LangFileError) -> Self {
        let message = error
            .detail()
            .map_or_else(|| error.to_string(), |detail| format!("{error}: {detail}"));
        Self {
            path: path.to_string(),
            error_type: error.error_type().to_string(),
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub files: usize,
    pub failed: usize,
    pub total_lines: usize,
    pub code_lines: usize,
    pub bytes: u64,
}

/// Records and failures from one batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct InspectionReport {
    pub records: Vec<FileRecord>,
    pub failures: Vec<InspectionFailure>,
}

impl InspectionReport {
    #[must_use]
    pub const fn new(records: Vec<FileRecord>, failures: Vec<InspectionFailure>) -> Self {
        Self { records, failures }
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        self.records.iter().fold(
            Summary {
                failed: self.failures.len(),
                ..Summary::default()
            },
            |mut acc, record| {
                acc.files += 1;
                acc.total_lines += record.lines.total;
                acc.code_lines += record.lines.code;
                acc.bytes += record.size_bytes;
                acc
            },
        )
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
