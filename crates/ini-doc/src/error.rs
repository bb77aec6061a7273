//! Error types for ini-doc

/// Result type for ini-doc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ini-doc operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("entry line {line} is out of range for a document of {line_count} lines")]
    DocumentMismatch { line: usize, line_count: usize },
}
