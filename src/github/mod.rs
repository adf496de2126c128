//! GitHub REST API integration module
//!
//! This module provides an async interface to GitHub's REST API. It follows a
//! modular design where the transport, retry and pagination layers are shared,
//! and each endpoint area extends [`GitHubClient`] in its own sub-module.
//!
//! ## Architecture
//!
//! - [`client`]: Core client; single-call transport and the retrying `execute`
//! - [`auth`]: Authentication handling and token management
//! - [`request`] / [`response`]: Request descriptors and decoded responses
//! - [`retry`]: Exponential backoff and rate-limit hints
//! - [`pagination`]: Offset pagination sweeps
//! - [`error`]: Error taxonomy
//! - [`types`]: Parameter and payload types
//! - Endpoint areas: [`repositories`], [`contents`], [`issues`],
//!   [`pull_requests`], [`stars`], [`organizations`], [`users`],
//!   [`workflows`], [`search`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ghrest::github::{GitHubClient, Listing};
//!
//! # async fn example() -> ghrest::github::Result<()> {
//! let client = GitHubClient::new(Some("your_token".to_string()))?;
//!
//! let repo_info = client.get_repository("rust-lang", "rust").await?;
//! println!("Repository: {}", repo_info["full_name"]);
//!
//! let starred = client.is_starred("rust-lang", "rust").await?;
//! let releases = client.list_releases("rust-lang", "rust", Listing::All).await?;
//! println!("starred: {starred}, releases: {}", releases.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod contents;
pub mod error;
pub mod issues;
pub mod organizations;
pub mod pagination;
pub mod pull_requests;
pub mod repositories;
pub mod request;
pub mod response;
pub mod retry;
pub mod search;
pub mod stars;
pub mod types;
pub mod users;
pub mod workflows;

// Re-export commonly used items for convenience
pub use auth::{AuthScheme, GitHubAuth};
pub use client::GitHubClient;
pub use error::{GitHubError, Result};
pub use pagination::{Listing, PageOptions};
pub use request::{MediaType, QueryValue, RequestDescriptor, ResponseFormat};
pub use response::{ApiResponse, ResponseBody};
pub use retry::RetryConfig;
pub use types::*;

pub use crate::constants::api::{API_BASE, DEFAULT_USER_AGENT};
