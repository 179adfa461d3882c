// Configuration loader
// Loads settings from laborbrief.toml / ~/.laborbrief/config.toml and the environment

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::*;
use super::settings::{Config, DataFiles};

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    openai_api_key: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    request_timeout_secs: Option<u64>,
    #[serde(default)]
    data_dir: Option<PathBuf>,
    #[serde(default)]
    output_dir: Option<PathBuf>,
    #[serde(default)]
    pdf_font: Option<PathBuf>,
    #[serde(default)]
    data: Option<DataFiles>,
}

/// Load configuration
///
/// An explicit path must exist. Otherwise the first of `./laborbrief.toml`
/// and `~/.laborbrief/config.toml` that exists is used, falling back to
/// defaults. `OPENAI_API_KEY` overrides the key from the file.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(),
    };

    let mut config = match path {
        Some(path) => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "Loaded config file");
            parse_config(&contents)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_key(&mut config, std::env::var(API_KEY_ENV).ok());
    Ok(config)
}

/// Parse TOML contents on top of the defaults
pub fn parse_config(contents: &str) -> Result<Config> {
    let toml_config: TomlConfig =
        toml::from_str(contents).context("Failed to parse config TOML")?;

    let mut config = Config::default();
    if let Some(key) = toml_config.openai_api_key {
        config.api_key = Some(key);
    }
    if let Some(model) = toml_config.model {
        config.model = model;
    }
    if let Some(base_url) = toml_config.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    config.request_timeout_secs = toml_config.request_timeout_secs;
    if let Some(dir) = toml_config.data_dir {
        config.data_dir = dir;
    }
    if let Some(dir) = toml_config.output_dir {
        config.output_dir = dir;
    }
    config.pdf_font = toml_config.pdf_font;
    if let Some(files) = toml_config.data {
        config.data_files = files;
    }

    Ok(config)
}

/// A non-empty environment key replaces whatever the file provided
fn apply_env_key(config: &mut Config, env_key: Option<String>) {
    if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
        config.api_key = Some(key);
    }
}

fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    let home = dirs::home_dir()?.join(HOME_CONFIG_PATH);
    home.is_file().then_some(home)
}
