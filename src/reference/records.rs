// JSON reference records (TST jurisprudence and precedents)

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

/// Orientação jurisprudencial / súmula entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JurisprudenceEntry {
    #[serde(default, deserialize_with = "loose_text")]
    pub tipo: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub numero: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub resumo: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub link: String,
}

/// Binding precedent (tese) entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PrecedentEntry {
    #[serde(default, deserialize_with = "loose_text")]
    pub numero: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub resumo: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub link: String,
}

/// Accept any JSON scalar: strings verbatim, numbers and booleans in their
/// JSON form, null as empty. Arrays/objects keep their compact JSON text.
fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Load a JSON list of records, degrading to an empty list on any failure
pub fn load_records<T>(path: &Path) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Reference file unavailable");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&contents) {
        Ok(records) => {
            tracing::debug!(path = %path.display(), count = records.len(), "Loaded reference records");
            records
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Malformed reference records");
            Vec::new()
        }
    }
}

pub fn load_jurisprudence(path: &Path) -> Vec<JurisprudenceEntry> {
    load_records(path)
}

pub fn load_precedents(path: &Path) -> Vec<PrecedentEntry> {
    load_records(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_jurisprudence_mixed_scalars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ojs_tst.json");
        fs::write(
            &path,
            r#"[
                {"tipo": "OJ", "numero": 394, "resumo": "Repouso semanal remunerado", "link": "https://tst.jus.br/oj394"},
                {"tipo": "Súmula", "numero": "437", "resumo": "Intervalo intrajornada", "link": null}
            ]"#,
        )
        .unwrap();

        let entries = load_jurisprudence(&path);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].numero, "394");
        assert_eq!(entries[0].link, "https://tst.jus.br/oj394");
        assert_eq!(entries[1].tipo, "Súmula");
        assert_eq!(entries[1].numero, "437");
        assert_eq!(entries[1].link, "");
    }

    #[test]
    fn test_precedent_missing_field_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("precedentes_tst.json");
        fs::write(&path, r#"[{"numero": 1, "resumo": "Tema repetitivo"}]"#).unwrap();

        let entries = load_precedents(&path);
        assert_eq!(
            entries,
            vec![PrecedentEntry {
                numero: "1".to_string(),
                resumo: "Tema repetitivo".to_string(),
                link: String::new(),
            }]
        );
    }

    #[test]
    fn test_missing_file_gives_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_jurisprudence(&dir.path().join("absent.json")).is_empty());
    }

    #[test]
    fn test_malformed_json_gives_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("precedentes_tst.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_precedents(&path).is_empty());

        // A single object instead of a list is also rejected
        fs::write(&path, r#"{"numero": 1}"#).unwrap();
        assert!(load_precedents(&path).is_empty());
    }
}
