// Report output
//
// The model's response is written twice: as a Word document and as a PDF,
// side by side in the output directory.

pub mod docx;
pub mod pdf;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::constants::REPORT_STEM;
use crate::errors::DocumentError;

pub use docx::render_docx;
pub use pdf::{render_pdf, wrap_line, PdfStyle};

/// Where the two report files go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub docx: PathBuf,
    pub pdf: PathBuf,
}

impl ReportPaths {
    /// `relatorio_final.docx` / `relatorio_final.pdf` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            docx: dir.join(format!("{REPORT_STEM}.docx")),
            pdf: dir.join(format!("{REPORT_STEM}.pdf")),
        }
    }
}

pub fn write_docx(text: &str, path: &Path) -> Result<()> {
    let bytes = render_docx(text)?;
    write_file(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote Word report");
    Ok(())
}

pub fn write_pdf(text: &str, path: &Path, style: &PdfStyle) -> Result<()> {
    let bytes = render_pdf(text, style)?;
    write_file(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote PDF report");
    Ok(())
}

/// Write both reports, creating the output directory if needed
pub fn write_reports(text: &str, paths: &ReportPaths, style: &PdfStyle) -> Result<()> {
    for parent in [paths.docx.parent(), paths.pdf.parent()].into_iter().flatten() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    write_docx(text, &paths.docx)?;
    write_pdf(text, &paths.pdf, style)?;
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), DocumentError> {
    fs::write(path, bytes).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_paths() {
        let paths = ReportPaths::in_dir(Path::new("/mnt/data"));
        assert_eq!(paths.docx, PathBuf::from("/mnt/data/relatorio_final.docx"));
        assert_eq!(paths.pdf, PathBuf::from("/mnt/data/relatorio_final.pdf"));
    }

    #[test]
    fn test_write_reports_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ReportPaths::in_dir(&dir.path().join("saida").join("caso-1"));

        write_reports("Relatorio final\nRisco: baixo", &paths, &PdfStyle::default()).unwrap();

        assert!(fs::read(&paths.docx).unwrap().starts_with(b"PK"));
        assert!(fs::read(&paths.pdf).unwrap().starts_with(b"%PDF"));
    }
}
