// Document text extraction
//
// PDFs are decoded page by page with pdf-extract; anything else is read as
// UTF-8 text (meeting summaries are often plain .txt files).

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::errors::DocumentError;

/// Extract the full text of a petition or meeting summary
pub fn extract_document_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = if is_pdf(path) {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| DocumentError::PdfExtract {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        String::from_utf8_lossy(&bytes).into_owned()
    };

    tracing::info!(
        path = %path.display(),
        chars = text.chars().count(),
        "Extracted document text"
    );
    Ok(text)
}

/// Extract text from an optional document; absence yields an empty string
pub fn extract_optional(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => extract_document_text(path),
        None => Ok(String::new()),
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
