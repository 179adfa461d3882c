// Document codec errors
//
// The PDF/DOCX crates each bring their own error types; they are folded
// into one enum here so callers can attach context with anyhow.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract text from PDF {}: {message}", .path.display())]
    PdfExtract { path: PathBuf, message: String },

    #[error("Failed to build Word document: {0}")]
    Docx(String),

    #[error("Failed to render PDF document: {0}")]
    PdfRender(String),

    #[error("Failed to load PDF font {}: {message}", .path.display())]
    Font { path: PathBuf, message: String },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
