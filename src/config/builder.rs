//! Client configuration builder

use super::{ClientConfig, ConfigFile, ConfigValidator};
use crate::constants::env;
use crate::github::auth::{AuthScheme, GitHubAuth};
use crate::github::error::Result;
use crate::github::retry::RetryConfig;
use std::time::Duration;

/// Builder for [`ClientConfig`].
///
/// Each layer only fills settings that are still unset, so calling
/// `with_file` and then `with_env` after the explicit setters yields the
/// precedence explicit > file > environment > default.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    token: Option<String>,
    auth_scheme: Option<AuthScheme>,
    api_version: Option<Option<String>>,
    user_agent: Option<String>,
    max_retries: Option<u32>,
    backoff_base: Option<Duration>,
    timeout: Option<Duration>,
    per_page: Option<u32>,
    max_pages: Option<Option<u32>>,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = Some(scheme);
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(Some(version.into()));
        self
    }

    /// Omit the `X-GitHub-Api-Version` header
    pub fn without_api_version(mut self) -> Self {
        self.api_version = Some(None);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    pub fn backoff_base(mut self, delay: Duration) -> Self {
        self.backoff_base = Some(delay);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Fill unset values from a configuration file
    pub fn with_file(mut self, file: &ConfigFile) -> Self {
        fill(&mut self.base_url, file.base_url.clone());
        fill(&mut self.token, file.token.clone());
        fill(&mut self.auth_scheme, file.auth_scheme);
        fill(&mut self.api_version, file.api_version.clone().map(Some));
        fill(&mut self.user_agent, file.user_agent.clone());
        fill(&mut self.max_retries, file.max_retries);
        fill(&mut self.backoff_base, file.backoff_base_ms.map(Duration::from_millis));
        fill(&mut self.timeout, file.timeout_secs.map(Duration::from_secs));
        fill(&mut self.per_page, file.per_page);
        fill(&mut self.max_pages, file.max_pages.map(Some));
        self
    }

    /// Fill unset values from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Fill unset values from an arbitrary variable lookup. Empty values are
    /// treated as unset.
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        fill(&mut self.token, var(env::TOKEN));
        fill(&mut self.base_url, var(env::API_URL));
        if self.auth_scheme.is_none() {
            if let Some(raw) = var(env::AUTH_SCHEME) {
                match raw.parse() {
                    Ok(scheme) => self.auth_scheme = Some(scheme),
                    Err(e) => tracing::warn!("ignoring {}: {}", env::AUTH_SCHEME, e),
                }
            }
        }
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ClientConfig> {
        let defaults = ClientConfig::default();

        let auth = self
            .token
            .filter(|t| !t.trim().is_empty())
            .map(|token| GitHubAuth::with_scheme(token, self.auth_scheme.unwrap_or_default()));

        let config = ClientConfig {
            base_url: self
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            auth,
            api_version: self.api_version.unwrap_or(defaults.api_version),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            retry: RetryConfig::new(
                self.max_retries.unwrap_or(defaults.retry.max_retries),
                self.backoff_base.unwrap_or(defaults.retry.base_delay),
            ),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            per_page: self.per_page.unwrap_or(defaults.per_page),
            max_pages: self.max_pages.unwrap_or(defaults.max_pages),
        };

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}
