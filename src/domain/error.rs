use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    /// Document kind is neither plain text nor a paginated text document
    UnsupportedFormat(String),
    /// Paginated source could not be opened at all
    UnreadableDocument(String),
    /// Byte content is not valid UTF-8
    DecodeError(String),
    /// Document opened but yielded no characters
    NoExtractableText,
    DocumentTooLarge(String),
    ValidationError(String),
    ConfigError(String),
    IoError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnsupportedFormat(kind) => write!(f, "Unsupported format: {}", kind),
            AppError::UnreadableDocument(msg) => write!(f, "Unreadable document: {}", msg),
            AppError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            AppError::NoExtractableText => write!(f, "Document contains no extractable text"),
            AppError::DocumentTooLarge(msg) => write!(f, "Document too large: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// Lets host applications box it or ship it across an IPC boundary
impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::DecodeError(err.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
