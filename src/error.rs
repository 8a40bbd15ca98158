//! Error types for the paper-maker library

use thiserror::Error;

/// Result type alias using PaperError
pub type Result<T> = std::result::Result<T, PaperError>;

/// Errors that can occur when rendering a paper drawing
#[derive(Debug, Error)]
pub enum PaperError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// I/O failure while writing rendered output
    #[error("failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    /// The PDF document is missing structure the renderer relies on
    #[error("invalid document structure: {0}")]
    DocumentError(String),
}
