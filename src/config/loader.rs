//! Configuration file loading and saving

use crate::github::auth::AuthScheme;
use crate::github::error::{GitHubError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of a `ghrest.yaml` file. Every key is optional.
///
/// ```yaml
/// base_url: https://github.example.com/api/v3
/// token: ghp_xxx
/// auth_scheme: token
/// max_retries: 5
/// backoff_base_ms: 500
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_scheme: Option<AuthScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backoff_base_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
}

impl ConfigFile {
    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GitHubError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
            .map_err(|e| GitHubError::InvalidConfig(format!("{}: {e}", path.display())))
    }

    /// Load the file if it exists, otherwise an empty configuration
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse YAML text. An empty document is an empty configuration.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| GitHubError::InvalidConfig(e.to_string()))
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self).map_err(|e| GitHubError::InvalidConfig(e.to_string()))?;
        std::fs::write(path, format!("---\n{yaml}")).map_err(|e| {
            GitHubError::InvalidConfig(format!("failed to write {}: {e}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_file() {
        let file = ConfigFile::parse("token: abc\nauth_scheme: token\nmax_retries: 5\n").unwrap();
        assert_eq!(file.token.as_deref(), Some("abc"));
        assert_eq!(file.auth_scheme, Some(AuthScheme::Token));
        assert_eq!(file.max_retries, Some(5));
        assert!(file.base_url.is_none());
    }

    #[test]
    fn test_parse_empty_file() {
        assert_eq!(ConfigFile::parse("  \n").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = ConfigFile::parse("tokn: abc\n").unwrap_err();
        assert!(matches!(err, GitHubError::InvalidConfig(_)));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ghrest.yaml");

        let file = ConfigFile {
            base_url: Some("https://ghe.example.com/api/v3".to_string()),
            per_page: Some(50),
            ..ConfigFile::default()
        };
        file.save(&path).unwrap();

        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded, file);
    }

    #[test]
    fn test_load_optional_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = ConfigFile::load_optional(temp_dir.path().join("missing.yaml")).unwrap();
        assert_eq!(loaded, ConfigFile::default());
        assert!(ConfigFile::load(temp_dir.path().join("missing.yaml")).is_err());
    }
}
