//! Base types and traits for the command pattern

use crate::github::{GitHubClient, Listing};
use anyhow::Result;
use clap::Args;

/// Context passed to all commands
#[derive(Clone)]
pub struct CommandContext {
    /// Client configured from flags, config file and environment
    pub client: GitHubClient,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}

/// Pagination flags shared by list actions
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageArgs {
    /// Fetch only this page instead of every page
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size when fetching a single page
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: u32,
}

impl PageArgs {
    pub fn listing(&self) -> Listing {
        match self.page {
            Some(page) => Listing::Page {
                page,
                per_page: self.per_page,
            },
            None => Listing::All,
        }
    }
}
