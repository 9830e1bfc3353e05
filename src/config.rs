use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{AtlasError, Result};

pub const DEFAULT_BASE_URL: &str = "https://cloud.mongodb.com/api/atlas/v2";
pub const DEFAULT_API_VERSION: &str = "2023-01-01";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const PUBLIC_KEY_VAR: &str = "ATLAS_PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "ATLAS_PRIVATE_KEY";
pub const ORG_ID_VAR: &str = "ATLAS_ORG_ID";
pub const BASE_URL_VAR: &str = "ATLAS_BASE_URL";

#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// The three credential strings, each possibly blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub public_key: String,
    pub private_key: String,
    pub org_id: String,
}

impl Credentials {
    /// Names of the environment variables whose value is missing.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (PUBLIC_KEY_VAR, &self.public_key),
            (PRIVATE_KEY_VAR, &self.private_key),
            (ORG_ID_VAR, &self.org_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| AtlasError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| AtlasError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "atlas-projects")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(AtlasError::NoConfigDir)
    }

    /// Resolve credentials with env vars taking precedence over the config file
    pub fn credentials(&self) -> Credentials {
        Credentials {
            public_key: resolve(PUBLIC_KEY_VAR, &self.public_key),
            private_key: resolve(PRIVATE_KEY_VAR, &self.private_key),
            org_id: resolve(ORG_ID_VAR, &self.org_id),
        }
    }

    pub fn base_url(&self) -> String {
        let url = resolve(BASE_URL_VAR, &self.base_url);
        if url.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            url
        }
    }

    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

fn resolve(var: &str, fallback: &Option<String>) -> String {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => fallback.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_blank_values() {
        let creds = Credentials {
            public_key: "abc".to_string(),
            private_key: "  ".to_string(),
            org_id: String::new(),
        };

        assert_eq!(creds.missing(), vec![PRIVATE_KEY_VAR, ORG_ID_VAR]);
        assert!(!creds.is_complete());
    }

    #[test]
    fn test_complete_credentials() {
        let creds = Credentials {
            public_key: "pub".to_string(),
            private_key: "priv".to_string(),
            org_id: "org".to_string(),
        };

        assert!(creds.missing().is_empty());
        assert!(creds.is_complete());
    }

    #[test]
    fn test_parse_config_file() {
        let config: Config = toml::from_str(
            r#"
public_key = "pub"
private_key = "priv"
org_id = "org"
api_version = "2024-08-05"
timeout_secs = 10
"#,
        )
        .unwrap();

        assert_eq!(config.public_key.as_deref(), Some("pub"));
        assert_eq!(config.api_version(), "2024-08-05");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.api_version(), DEFAULT_API_VERSION);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
