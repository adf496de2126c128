//! Error taxonomy for REST API calls.
//!
//! Transport, rate-limit and server failures are retryable and normally never
//! reach callers: the retry layer either recovers from them or wraps the last
//! one in [`GitHubError::ExhaustedRetries`]. Client errors and decode errors
//! are fatal and surface immediately.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T, E = GitHubError> = std::result::Result<T, E>;

/// Errors that can occur when interacting with the REST API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// No response was obtained (connect failure, timeout, reset).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 429.
    #[error("rate limited{}", retry_hint(.retry_after))]
    RateLimited { retry_after: Option<Duration> },

    /// The server answered with a 5xx status.
    #[error("server error ({status}): {message}")]
    Server { status: StatusCode, message: String },

    /// The server rejected the request with a 4xx status other than 429.
    #[error("client error ({status}): {message}")]
    Client { status: StatusCode, message: String },

    /// The retry budget was spent on retryable failures.
    #[error("request failed after {attempts} attempts: {last}")]
    ExhaustedRetries {
        attempts: u32,
        #[source]
        last: Box<GitHubError>,
    },

    /// A response claimed a JSON body that could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// The client could not be built from the supplied configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for GitHubError {
    fn from(err: serde_json::Error) -> Self {
        GitHubError::Decode {
            message: err.to_string(),
        }
    }
}

/// Shape of the JSON error documents returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl GitHubError {
    /// Classifies a non-success response.
    ///
    /// `body` is the raw response text; when it is a JSON error document its
    /// `message` field becomes the error message.
    pub fn from_status(status: StatusCode, body: &str, retry_after: Option<Duration>) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return GitHubError::RateLimited { retry_after };
        }

        let message = extract_message(status, body);
        if status.is_server_error() {
            GitHubError::Server { status, message }
        } else {
            GitHubError::Client { status, message }
        }
    }

    /// Whether the retry layer may attempt the call again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GitHubError::Transport(_) | GitHubError::RateLimited { .. } | GitHubError::Server { .. }
        )
    }

    /// HTTP status attached to the error, looking through exhausted retries.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GitHubError::Server { status, .. } | GitHubError::Client { status, .. } => {
                Some(*status)
            }
            GitHubError::RateLimited { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            GitHubError::Transport(e) => e.status(),
            GitHubError::ExhaustedRetries { last, .. } => last.status(),
            GitHubError::Decode { .. } | GitHubError::InvalidConfig(_) => None,
        }
    }

    /// True for a fatal 404, the negative answer of a membership check.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GitHubError::Client { status, .. } if *status == StatusCode::NOT_FOUND
        )
    }
}

fn retry_hint(retry_after: &Option<Duration>) -> String {
    match retry_after {
        Some(d) => format!(", retry after {:.1}s", d.as_secs_f64()),
        None => String::new(),
    }
}

fn extract_message(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(body)
    {
        return message;
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}
