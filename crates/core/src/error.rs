//! Error types for slide deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a slide deck.
#[derive(Error, Debug)]
pub enum Error {
    /// A required setting is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The text generation pipeline failed or returned unusable output.
    #[error("Pipeline error: {0}")]
    PipelineError(String),

    /// The chat-completion API could not be reached or rejected the request.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML error (for PPTX).
    #[error("XML error: {0}")]
    XmlError(String),
}

/// The two failure classes reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Halts the run before any work starts.
    Configuration,
    /// Any failure during pipeline execution or rendering.
    Generation,
}

impl Error {
    /// Classify this error for reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ConfigurationError(_) => ErrorKind::Configuration,
            _ => ErrorKind::Generation,
        }
    }
}
