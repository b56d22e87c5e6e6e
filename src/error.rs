use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangFileError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    ReadFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LangFileError {
    /// Short category name used in reports.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "FileNotFound",
            Self::ReadFailure { .. } => "ReadFailure",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The primary subject of the error: the offending path, or the inner error text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } | Self::ReadFailure { path, .. } => path.clone(),
            Self::Io(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::ReadFailure { source, .. } => Some(source.to_string()),
            Self::FileNotFound { .. } | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LangFileError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
