//! ghrest - A GitHub REST API client with retries, pagination and typed endpoints

pub mod commands;
pub mod config;
pub mod constants;
pub mod github;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{ClientConfig, ClientConfigBuilder, ConfigFile};
pub use github::{GitHubClient, GitHubError, Listing, RequestDescriptor};
