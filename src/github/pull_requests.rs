//! Pull request operations

use super::client::GitHubClient;
use super::error::Result;
use super::pagination::Listing;
use super::request::RequestDescriptor;
use super::types::{MergeOptions, NewPullRequest, PullRequestListParams, PullRequestUpdate};
use serde_json::Value;

/// Request builders for pull request endpoints
pub mod request {
    use super::*;

    fn pull_path(owner: &str, repo: &str, number: u64) -> String {
        format!("/repos/{owner}/{repo}/pulls/{number}")
    }

    pub fn list(
        owner: &str,
        repo: &str,
        params: &PullRequestListParams,
    ) -> Result<RequestDescriptor> {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}/pulls")).query(params)
    }

    pub fn get(owner: &str, repo: &str, number: u64) -> RequestDescriptor {
        RequestDescriptor::get(pull_path(owner, repo, number))
    }

    pub fn create(owner: &str, repo: &str, pull: &NewPullRequest) -> Result<RequestDescriptor> {
        RequestDescriptor::post(format!("/repos/{owner}/{repo}/pulls")).json(pull)
    }

    pub fn update(
        owner: &str,
        repo: &str,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<RequestDescriptor> {
        RequestDescriptor::patch(pull_path(owner, repo, number)).json(update)
    }

    pub fn merge(
        owner: &str,
        repo: &str,
        number: u64,
        options: &MergeOptions,
    ) -> Result<RequestDescriptor> {
        RequestDescriptor::put(format!("{}/merge", pull_path(owner, repo, number))).json(options)
    }

    pub fn check_merged(owner: &str, repo: &str, number: u64) -> RequestDescriptor {
        RequestDescriptor::get(format!("{}/merge", pull_path(owner, repo, number)))
    }
}

impl GitHubClient {
    pub async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        params: &PullRequestListParams,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(request::list(owner, repo, params)?, listing, self.page_options())
            .await
    }

    pub async fn get_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        self.execute_json(&request::get(owner, repo, number)).await
    }

    /// Create a pull request on GitHub
    ///
    /// # Arguments
    /// * `pull` - Title, head and base branches, plus optional body and draft flag
    ///
    /// # Returns
    /// The created pull request
    ///
    /// # Errors
    /// Returns a client error if the API rejects the request, e.g. 422 when
    /// the head branch has no commits ahead of base
    pub async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull: &NewPullRequest,
    ) -> Result<Value> {
        self.execute_json(&request::create(owner, repo, pull)?).await
    }

    pub async fn update_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &PullRequestUpdate,
    ) -> Result<Value> {
        self.execute_json(&request::update(owner, repo, number, update)?)
            .await
    }

    /// Merge a pull request
    ///
    /// # Returns
    /// The merge result (`sha`, `merged`, `message`). A pull request that
    /// cannot be merged is a 405 client error; a stale `sha` is a 409.
    pub async fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        options: &MergeOptions,
    ) -> Result<Value> {
        self.execute_json(&request::merge(owner, repo, number, options)?)
            .await
    }

    /// Whether the pull request has been merged (204) or not (404)
    pub async fn is_pull_request_merged(&self, owner: &str, repo: &str, number: u64) -> Result<bool> {
        self.check(&request::check_merged(owner, repo, number)).await
    }
}
