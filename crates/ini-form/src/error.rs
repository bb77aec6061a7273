//! Error types for ini-form

/// Result type for ini-form operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ini-form operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Document error: {0}")]
    Doc(#[from] ini_doc::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] ini_fs::Error),
}
