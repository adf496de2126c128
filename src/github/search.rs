//! Repository search and the trending heuristic

use super::client::GitHubClient;
use super::error::Result;
use super::pagination::Listing;
use super::request::RequestDescriptor;
use super::types::{Direction, SearchParams, TrendingQuery};
use chrono::{NaiveDate, Utc};
use serde_json::Value;

/// Items field of search result pages
pub const ITEMS_FIELD: &str = "items";

/// Search never returns more than this many results per page
const MAX_SEARCH_PAGE: u32 = 100;

/// Search only serves the first 1000 results of a query; later pages get 422
pub const SEARCH_RESULT_CAP: u32 = 1000;

/// Pages a search sweep may fetch at `per_page` without passing the result cap
pub fn search_max_pages(per_page: u32, max_pages: Option<u32>) -> u32 {
    let reachable = SEARCH_RESULT_CAP / per_page.clamp(1, MAX_SEARCH_PAGE);
    max_pages.map_or(reachable, |max| max.min(reachable))
}

pub mod request {
    use super::*;

    pub fn repositories(params: &SearchParams) -> Result<RequestDescriptor> {
        RequestDescriptor::get("/search/repositories").query(params)
    }

    /// Search for the most starred repositories created inside the window
    pub fn trending(query: &TrendingQuery, today: NaiveDate) -> Result<RequestDescriptor> {
        let params = SearchParams {
            q: query.search_query(today),
            sort: Some("stars".to_string()),
            order: Some(Direction::Desc),
        };
        Ok(repositories(&params)?.param("per_page", query.limit.clamp(1, MAX_SEARCH_PAGE)))
    }
}

impl GitHubClient {
    /// Search repositories; returns the matching items
    pub async fn search_repositories(
        &self,
        params: &SearchParams,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        let options = self.page_options().with_items_field(ITEMS_FIELD);
        let max_pages = search_max_pages(options.per_page, options.max_pages);
        let options = options.with_max_pages(Some(max_pages));
        self.list(request::repositories(params)?, listing, options)
            .await
    }

    /// Recently created repositories ranked by stars.
    ///
    /// The API has no trending endpoint; this is a best-effort approximation
    /// and does not match the trending page on github.com.
    pub async fn trending_repositories(&self, query: &TrendingQuery) -> Result<Vec<Value>> {
        let limit = query.limit.clamp(1, MAX_SEARCH_PAGE);
        let request = request::trending(query, Utc::now().date_naive())?;
        let mut items = self
            .fetch_page(&request, 1, limit, Some(ITEMS_FIELD))
            .await?;
        items.truncate(limit as usize);
        Ok(items)
    }
}
