//! `cubetypes.config.json` loading.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "./cubetypes.config.json";

/// File-based configuration; every field has a CLI or environment fallback.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubetypesConfig {
    pub api_url: Option<String>,
    pub api_secret: Option<String>,
    /// Arbitrary claims signed into the meta API token when present.
    pub security_context: Option<Value>,
    pub group_delimiter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load the config file. A missing file is not an error.
pub fn load_config(path: &Path) -> Result<CubetypesConfig, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CubetypesConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(&PathBuf::from("./does-not-exist.config.json")).unwrap();
        assert!(config.api_url.is_none());
        assert!(config.group_delimiter.is_none());
    }

    #[test]
    fn parses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cubetypes.config.json");
        std::fs::write(
            &path,
            r#"{
                "apiUrl": "http://localhost:4000",
                "securityContext": { "tenant": "acme" },
                "groupDelimiter": "-"
            }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:4000"));
        assert_eq!(config.group_delimiter.as_deref(), Some("-"));
        assert_eq!(config.security_context.unwrap()["tenant"], "acme");
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
