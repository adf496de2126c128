//! Configuration validation utilities

use super::ClientConfig;
use crate::github::error::{GitHubError, Result};
use reqwest::Url;

/// Largest page size the API honours
pub const MAX_PER_PAGE: u32 = 100;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete client configuration
    pub fn validate(config: &ClientConfig) -> Result<()> {
        Self::validate_base_url(&config.base_url)?;

        if config.user_agent.trim().is_empty() {
            return Err(invalid("user agent must not be empty"));
        }
        if config.per_page == 0 || config.per_page > MAX_PER_PAGE {
            return Err(invalid(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                config.per_page
            )));
        }
        if config.max_pages == Some(0) {
            return Err(invalid("max_pages must be at least 1"));
        }
        if config.timeout.is_zero() {
            return Err(invalid("timeout must be greater than zero"));
        }
        if let Some(auth) = &config.auth {
            if auth.token().chars().any(char::is_whitespace) {
                return Err(invalid("token must not contain whitespace"));
            }
        }
        Ok(())
    }

    /// The base URL must be an absolute http(s) URL
    pub fn validate_base_url(base_url: &str) -> Result<()> {
        let url = Url::parse(base_url)
            .map_err(|e| invalid(format!("invalid base URL '{base_url}': {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!(
                "base URL must use http or https, got '{other}'"
            ))),
        }
    }
}

fn invalid(message: impl Into<String>) -> GitHubError {
    GitHubError::InvalidConfig(message.into())
}
