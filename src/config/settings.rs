// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::constants::*;

/// File names of the reference datasets inside the data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFiles {
    #[serde(default = "default_statements")]
    pub statements: String,

    #[serde(default = "default_jurisprudence")]
    pub jurisprudence: String,

    #[serde(default = "default_precedents")]
    pub precedents: String,

    /// Spreadsheet (xlsx/xls/ods) or CSV file of standard theses
    #[serde(default = "default_theses")]
    pub theses: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            statements: default_statements(),
            jurisprudence: default_jurisprudence(),
            precedents: default_precedents(),
            theses: default_theses(),
        }
    }
}

fn default_statements() -> String {
    STATEMENTS_FILE.to_string()
}

fn default_jurisprudence() -> String {
    JURISPRUDENCE_FILE.to_string()
}

fn default_precedents() -> String {
    PRECEDENTS_FILE.to_string()
}

fn default_theses() -> String {
    THESES_FILE.to_string()
}

/// Resolved locations of the four reference datasets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub statements: PathBuf,
    pub jurisprudence: PathBuf,
    pub precedents: PathBuf,
    pub theses: PathBuf,
}

impl DataPaths {
    pub fn resolve(data_dir: &Path, files: &DataFiles) -> Self {
        Self {
            statements: data_dir.join(&files.statements),
            jurisprudence: data_dir.join(&files.jurisprudence),
            precedents: data_dir.join(&files.precedents),
            theses: data_dir.join(&files.theses),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the completion endpoint (config file or OPENAI_API_KEY)
    pub api_key: Option<String>,

    /// Model identifier sent with the request
    pub model: String,

    /// API root, e.g. "https://api.openai.com"
    pub base_url: String,

    /// Whole-request timeout; `None` waits for the server indefinitely
    pub request_timeout_secs: Option<u64>,

    /// Directory holding the reference datasets
    pub data_dir: PathBuf,

    /// Dataset file names inside `data_dir`
    pub data_files: DataFiles,

    /// Directory the Word and PDF reports are written to
    pub output_dir: PathBuf,

    /// TrueType font for the PDF report (built-in Helvetica when unset)
    pub pdf_font: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            data_files: DataFiles::default(),
            output_dir: PathBuf::from("."),
            pdf_font: None,
        }
    }
}

impl Config {
    /// Dataset paths under the configured data directory
    pub fn data_paths(&self) -> DataPaths {
        DataPaths::resolve(&self.data_dir, &self.data_files)
    }

    /// The API key, or an error telling the user where to put one
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => anyhow::bail!(
                "No API key configured.\n\n\
                Set `openai_api_key` in {} (or ~/{}),\n\
                or export the environment variable:\n\
                export {}=\"sk-...\"",
                LOCAL_CONFIG_FILE,
                HOME_CONFIG_PATH,
                API_KEY_ENV
            ),
        }
    }
}
