// Project-wide constants
//
// Centralised here so file names and other magic values have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Model identifier sent with every completion request.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// OpenAI API root (the client appends `/v1/chat/completions`).
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Directory holding the reference datasets, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "dados";

pub const STATEMENTS_FILE: &str = "enunciados_trt7.txt";
pub const JURISPRUDENCE_FILE: &str = "ojs_tst.json";
pub const PRECEDENTS_FILE: &str = "precedentes_tst.json";
pub const THESES_FILE: &str = "teses.xlsx";

/// File stem shared by the Word and PDF reports.
pub const REPORT_STEM: &str = "relatorio_final";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "laborbrief.toml";

/// Config file looked up under the home directory.
pub const HOME_CONFIG_PATH: &str = ".laborbrief/config.toml";

/// Substituted into the prompt when no meeting summary was supplied.
pub const MEETING_PLACEHOLDER: &str = "Não enviada";

/// Spreadsheet column naming the claim.
pub const THESIS_CLAIM_COLUMN: &str = "Pedido";

/// Spreadsheet column holding the standard defence line.
pub const THESIS_DEFENSE_COLUMN: &str = "Linha de Defesa Padrão";
