//! GitHub API client implementation
//!
//! This module provides the main `GitHubClient` struct which serves as the entry point
//! for all GitHub API operations. The client owns the HTTP connection pool and the
//! immutable [`ClientConfig`]; it is cheap to clone and safe to share across tasks.
//!
//! ## Architecture
//!
//! Every call follows the same path:
//!
//! 1. An endpoint wrapper builds a [`RequestDescriptor`]
//! 2. [`GitHubClient::execute`] runs it under the retry policy
//! 3. [`GitHubClient::send_once`] performs exactly one HTTP exchange and classifies
//!    the outcome
//!
//! The endpoint areas (`repositories.rs`, `issues.rs`, `stars.rs`, ...) extend the
//! client with `impl` blocks containing related methods.

use super::auth::GitHubAuth;
use super::error::{GitHubError, Result};
use super::request::{MediaType, RequestDescriptor, ResponseFormat};
use super::response::{ApiResponse, ResponseBody};
use super::retry::{self, retry_with_backoff};
use crate::config::ClientConfig;
use crate::constants::api::API_VERSION_HEADER;
use crate::constants::rate_limit;
use chrono::Utc;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// GitHub API client for interacting with GitHub's REST API
///
/// ## Example
///
/// ```rust,no_run
/// use ghrest::github::GitHubClient;
///
/// # async fn example() -> ghrest::github::Result<()> {
/// // Anonymous client against api.github.com, token taken from GITHUB_TOKEN if set
/// let client = GitHubClient::new(None)?;
///
/// let repo = client.get_repository("rust-lang", "rust").await?;
/// println!("{}", repo["full_name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) config: Arc<ClientConfig>,
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client for api.github.com
    ///
    /// # Arguments
    /// * `token` - Optional personal access token; falls back to `GITHUB_TOKEN`
    ///
    /// # Returns
    /// A new client, or an error when the environment holds invalid settings
    pub fn new(token: Option<String>) -> Result<Self> {
        let mut builder = ClientConfig::builder();
        if let Some(token) = token {
            builder = builder.token(token);
        }
        Self::with_config(builder.with_env().build()?)
    }

    /// Create a client from a complete configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GitHubError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        debug!(
            base_url = %config.base_url,
            authenticated = config.auth.is_some(),
            max_retries = config.retry.max_retries,
            "created GitHub client"
        );

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create a client configured purely from the environment
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Check if the client has authentication configured
    pub fn is_authenticated(&self) -> bool {
        self.config.auth.is_some()
    }

    /// Get the authentication token (if available)
    pub fn token(&self) -> Option<&str> {
        self.config.auth.as_ref().map(GitHubAuth::token)
    }

    /// Headers for one request.
    ///
    /// Defaults first (Accept, User-Agent, API version, Authorization), then the
    /// descriptor's own headers, which replace defaults of the same name.
    fn build_headers(&self, request: &RequestDescriptor) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let accept = request.accept.clone().unwrap_or_default();
        headers.insert(ACCEPT, header_value(accept.as_str())?);
        headers.insert(USER_AGENT, header_value(&self.config.user_agent)?);

        if let Some(version) = &self.config.api_version {
            headers.insert(HeaderName::from_static(API_VERSION_HEADER), header_value(version)?);
        }

        if let Some(auth) = &self.config.auth {
            let mut value = header_value(&auth.get_auth_header())?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| GitHubError::InvalidConfig(format!("invalid header name '{name}': {e}")))?;
            headers.insert(name, header_value(value)?);
        }

        Ok(headers)
    }

    /// Perform exactly one HTTP exchange, without retries.
    ///
    /// 2xx responses are returned with their body decoded according to the
    /// descriptor's format; every other outcome becomes a classified error.
    pub async fn send_once(&self, request: &RequestDescriptor) -> Result<ApiResponse> {
        let url = self.config.url_for(&request.path);
        let headers = self.build_headers(request)?;

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(headers);

        if !request.query.is_empty() {
            let pairs: Vec<(&str, String)> = request
                .query
                .iter()
                .map(|(k, v)| (k.as_str(), v.to_string()))
                .collect();
            builder = builder.query(&pairs);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!(method = %request.method, %url, "sending request");
        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        debug!(method = %request.method, %url, status = status.as_u16(), "received response");

        if status.is_success() {
            let bytes = response.bytes().await?;
            let body = if bytes.is_empty() || status == StatusCode::NO_CONTENT {
                ResponseBody::Empty
            } else {
                match request.format {
                    ResponseFormat::Raw => ResponseBody::Raw(bytes.to_vec()),
                    ResponseFormat::Json => ResponseBody::Json(serde_json::from_slice(&bytes)?),
                }
            };
            return Ok(ApiResponse {
                status,
                headers,
                body,
            });
        }

        let retry_after = if status == StatusCode::TOO_MANY_REQUESTS {
            retry::rate_limit_delay(&headers, Utc::now())
        } else {
            None
        };
        if status == StatusCode::FORBIDDEN
            && headers
                .get(rate_limit::REMAINING)
                .is_some_and(|v| v.as_bytes() == b"0")
        {
            warn!(%url, "primary rate limit exhausted; not retrying 403");
        }
        let text = response.text().await.unwrap_or_default();
        trace!(status = status.as_u16(), body = %text, "error response body");

        Err(GitHubError::from_status(status, &text, retry_after))
    }

    /// Run a request under the client's retry policy
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<ApiResponse> {
        retry_with_backoff(self.config.retry, || self.send_once(request)).await
    }

    /// Run a request and decode its JSON body into `T`
    pub async fn execute_json<T: DeserializeOwned>(&self, request: &RequestDescriptor) -> Result<T> {
        self.execute(request).await?.decode()
    }

    /// Run a request whose response body is irrelevant
    pub async fn execute_unit(&self, request: &RequestDescriptor) -> Result<()> {
        self.execute(request).await.map(|_| ())
    }

    /// Run a membership-style check: any 2xx means `true`, a 404 means `false`.
    ///
    /// Every other failure propagates.
    pub async fn check(&self, request: &RequestDescriptor) -> Result<bool> {
        match self.execute(request).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// GET `path`, returning the JSON body or `None` for an empty response
    pub async fn get(&self, path: &str) -> Result<Option<Value>> {
        Ok(self.execute(&RequestDescriptor::get(path)).await?.into_json())
    }

    /// GET `path` and decode the body into `T`
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute_json(&RequestDescriptor::get(path)).await
    }

    /// GET `path` with a custom media type
    pub async fn get_with_accept(&self, path: &str, accept: MediaType) -> Result<Option<Value>> {
        let request = RequestDescriptor::get(path).accept(accept);
        Ok(self.execute(&request).await?.into_json())
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Option<Value>> {
        let request = RequestDescriptor::post(path).json(body)?;
        Ok(self.execute(&request).await?.into_json())
    }

    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Option<Value>> {
        let mut request = RequestDescriptor::put(path);
        if let Some(body) = body {
            request = request.json(body)?;
        }
        Ok(self.execute(&request).await?.into_json())
    }

    pub async fn patch(&self, path: &str, body: &Value) -> Result<Option<Value>> {
        let request = RequestDescriptor::patch(path).json(body)?;
        Ok(self.execute(&request).await?.into_json())
    }

    pub async fn delete(&self, path: &str) -> Result<Option<Value>> {
        Ok(self.execute(&RequestDescriptor::delete(path)).await?.into_json())
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| GitHubError::InvalidConfig(format!("invalid header value: {e}")))
}
