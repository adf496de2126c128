//! Search and trending command implementations

use super::output::{print_json, print_note};
use super::{Command, CommandContext, PageArgs};
use crate::github::{Direction, SearchParams, TrendingQuery, TrendingWindow};
use anyhow::Result;
use async_trait::async_trait;

/// Recently created repositories ranked by stars
pub struct TrendingCommand {
    pub language: Option<String>,
    pub window: TrendingWindow,
    pub limit: u32,
}

#[async_trait]
impl Command for TrendingCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let query = TrendingQuery {
            language: self.language.clone(),
            window: self.window,
            limit: self.limit,
        };
        let repos = context.client.trending_repositories(&query).await?;
        if repos.is_empty() {
            print_note("No repositories matched");
        }
        print_json(&repos)
    }
}

/// Free-form repository search
pub struct SearchCommand {
    pub query: String,
    pub sort: Option<String>,
    pub order: Option<Direction>,
    pub page: PageArgs,
}

#[async_trait]
impl Command for SearchCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let params = SearchParams {
            q: self.query.clone(),
            sort: self.sort.clone(),
            order: self.order,
        };
        let repos = context
            .client
            .search_repositories(&params, self.page.listing())
            .await?;
        print_json(&repos)
    }
}
