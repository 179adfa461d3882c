// Word report: one paragraph per line of the model's response

use docx_rs::{Docx, Paragraph, Run};
use std::io::Cursor;

use crate::errors::DocumentError;

/// Render the report text as DOCX bytes
pub fn render_docx(text: &str) -> Result<Vec<u8>, DocumentError> {
    let docx = text.split('\n').fold(Docx::new(), |docx, line| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)))
    });

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DocumentError::Docx(e.to_string()))?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_is_zip_container() {
        let bytes = render_docx("Relatório\n\n1. Nome do reclamante: João").unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_empty_text_still_renders() {
        let bytes = render_docx("").unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
