// Static reference datasets
//
// Four read-only inputs consumed once per run. A dataset that cannot be
// loaded is logged and replaced with an empty value; it never fails the run.

pub mod records;
pub mod theses;

use std::path::Path;

use crate::config::DataPaths;

pub use records::{load_jurisprudence, load_precedents, JurisprudenceEntry, PrecedentEntry};
pub use theses::{load_theses, Thesis, ThesisTable};

/// Load the TRT-7 statements text, or an empty string if unavailable
pub fn load_statements(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Statements file unavailable");
            String::new()
        }
    }
}

/// Everything the prompt draws on besides the uploaded documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceLibrary {
    pub statements: String,
    pub jurisprudence: Vec<JurisprudenceEntry>,
    pub precedents: Vec<PrecedentEntry>,
    pub theses: ThesisTable,
}

impl ReferenceLibrary {
    pub fn load(paths: &DataPaths) -> Self {
        let library = Self {
            statements: load_statements(&paths.statements),
            jurisprudence: load_jurisprudence(&paths.jurisprudence),
            precedents: load_precedents(&paths.precedents),
            theses: load_theses(&paths.theses),
        };

        tracing::info!(
            statements_chars = library.statements.chars().count(),
            jurisprudence = library.jurisprudence.len(),
            precedents = library.precedents.len(),
            theses = library.theses.len(),
            "Reference library loaded"
        );
        library
    }
}
