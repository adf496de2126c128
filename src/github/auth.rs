//! Authentication handling and token management

use crate::github::error::GitHubError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Form of the `Authorization` header value.
///
/// The API accepts both `Bearer <token>` and `token <token>`, but the two are
/// not guaranteed to be interchangeable for every token type, so the scheme is
/// chosen per client rather than unified.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    #[default]
    Bearer,
    Token,
}

impl AuthScheme {
    fn prefix(self) -> &'static str {
        match self {
            AuthScheme::Bearer => "Bearer",
            AuthScheme::Token => "token",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::Bearer => write!(f, "bearer"),
            AuthScheme::Token => write!(f, "token"),
        }
    }
}

impl FromStr for AuthScheme {
    type Err = GitHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bearer" => Ok(AuthScheme::Bearer),
            "token" => Ok(AuthScheme::Token),
            other => Err(GitHubError::InvalidConfig(format!(
                "unknown auth scheme '{other}' (expected 'bearer' or 'token')"
            ))),
        }
    }
}

/// Credential attached to every request made by a client.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubAuth {
    token: String,
    scheme: AuthScheme,
}

impl GitHubAuth {
    /// Create a credential using the default `Bearer` scheme
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_scheme(token, AuthScheme::default())
    }

    pub fn with_scheme(token: impl Into<String>, scheme: AuthScheme) -> Self {
        Self {
            token: token.into(),
            scheme,
        }
    }

    /// The raw token
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    /// Value for the `Authorization` header
    pub fn get_auth_header(&self) -> String {
        format!("{} {}", self.scheme.prefix(), self.token)
    }
}

// Keep tokens out of logs and panic messages.
impl fmt::Debug for GitHubAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubAuth")
            .field("token", &"<redacted>")
            .field("scheme", &self.scheme)
            .finish()
    }
}
