//! Client configuration management module
//!
//! Configuration is layered: values set explicitly on the builder win over
//! values from a YAML configuration file, which win over environment
//! variables, which win over built-in defaults.

pub mod builder;
pub mod loader;
pub mod validation;

pub use builder::ClientConfigBuilder;
pub use loader::ConfigFile;
pub use validation::ConfigValidator;

use crate::constants::{api, defaults};
use crate::github::auth::GitHubAuth;
use crate::github::error::Result;
use crate::github::retry::RetryConfig;
use std::time::Duration;

/// Immutable settings shared by every request a client makes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Credential sent in the `Authorization` header; anonymous when `None`
    pub auth: Option<GitHubAuth>,
    /// Value of `X-GitHub-Api-Version`; the header is omitted when `None`
    pub api_version: Option<String>,
    pub user_agent: String,
    pub retry: RetryConfig,
    pub timeout: Duration,
    /// Page size used by pagination sweeps
    pub per_page: u32,
    /// Safety cap on pages per sweep; unbounded when `None`
    pub max_pages: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: api::API_BASE.to_string(),
            auth: None,
            api_version: Some(api::DEFAULT_API_VERSION.to_string()),
            user_agent: api::DEFAULT_USER_AGENT.to_string(),
            retry: RetryConfig::default(),
            timeout: Duration::from_secs(defaults::TIMEOUT_SECS),
            per_page: defaults::PER_PAGE,
            max_pages: Some(defaults::MAX_PAGES),
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Defaults overlaid with `GITHUB_TOKEN`, `GITHUB_API_URL` and
    /// `GHREST_AUTH_SCHEME`
    pub fn from_env() -> Result<Self> {
        ClientConfigBuilder::new().with_env().build()
    }

    /// Join `path` onto the base URL
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
