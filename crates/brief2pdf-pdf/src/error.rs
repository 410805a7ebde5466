//! Error types for PDF generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur during PDF generation
#[derive(Error, Debug)]
pub enum PdfError {
    /// Typst compilation or PDF export error
    #[error("Typst compilation failed: {0}")]
    Compilation(String),

    /// A configured font file could not be read
    #[error("Failed to read font {}: {source}", path.display())]
    Font {
        path: PathBuf,
        source: std::io::Error,
    },
}
