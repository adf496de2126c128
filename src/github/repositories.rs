//! GitHub Repository API operations
//!
//! Repository metadata, branches, topics, releases and collaborator checks.

use super::client::GitHubClient;
use super::error::Result;
use super::pagination::Listing;
use super::request::RequestDescriptor;
use super::types::{BranchListParams, NewRepository, RepoListParams, RepositoryUpdate};
use serde::Deserialize;
use serde_json::Value;

/// Request builders for repository endpoints
pub mod request {
    use super::*;

    pub fn get(owner: &str, repo: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}"))
    }

    pub fn list_for_org(org: &str, params: &RepoListParams) -> Result<RequestDescriptor> {
        RequestDescriptor::get(format!("/orgs/{org}/repos")).query(params)
    }

    pub fn list_for_user(user: &str, params: &RepoListParams) -> Result<RequestDescriptor> {
        RequestDescriptor::get(format!("/users/{user}/repos")).query(params)
    }

    /// Creates under the authenticated user, or under `org` when given
    pub fn create(org: Option<&str>, repository: &NewRepository) -> Result<RequestDescriptor> {
        let path = match org {
            Some(org) => format!("/orgs/{org}/repos"),
            None => "/user/repos".to_string(),
        };
        RequestDescriptor::post(path).json(repository)
    }

    pub fn update(owner: &str, repo: &str, update: &RepositoryUpdate) -> Result<RequestDescriptor> {
        RequestDescriptor::patch(format!("/repos/{owner}/{repo}")).json(update)
    }

    pub fn delete(owner: &str, repo: &str) -> RequestDescriptor {
        RequestDescriptor::delete(format!("/repos/{owner}/{repo}"))
    }

    pub fn list_branches(
        owner: &str,
        repo: &str,
        params: &BranchListParams,
    ) -> Result<RequestDescriptor> {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}/branches")).query(params)
    }

    pub fn get_branch(owner: &str, repo: &str, branch: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}/branches/{branch}"))
    }

    pub fn topics(owner: &str, repo: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}/topics"))
    }

    pub fn latest_release(owner: &str, repo: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}/releases/latest"))
    }

    pub fn list_releases(owner: &str, repo: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}/releases"))
    }

    pub fn check_collaborator(owner: &str, repo: &str, user: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}/collaborators/{user}"))
    }
}

#[derive(Deserialize)]
struct Topics {
    names: Vec<String>,
}

impl GitHubClient {
    /// Get repository information from GitHub
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    ///
    /// # Returns
    /// The repository object; a missing repository is a 404 client error
    ///
    /// # Example
    /// ```rust,no_run
    /// use ghrest::github::GitHubClient;
    ///
    /// # async fn example() -> ghrest::github::Result<()> {
    /// let client = GitHubClient::new(Some("github_token".to_string()))?;
    /// let repo_info = client.get_repository("octocat", "Hello-World").await?;
    /// println!("Repository: {}", repo_info["full_name"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<Value> {
        self.execute_json(&request::get(owner, repo)).await
    }

    /// List repositories belonging to an organization
    pub async fn list_org_repositories(
        &self,
        org: &str,
        params: &RepoListParams,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(request::list_for_org(org, params)?, listing, self.page_options())
            .await
    }

    /// List public repositories of a user
    pub async fn list_user_repositories(
        &self,
        user: &str,
        params: &RepoListParams,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(request::list_for_user(user, params)?, listing, self.page_options())
            .await
    }

    /// Create a repository
    ///
    /// # Arguments
    /// * `org` - Organization to create the repository in; `None` creates it
    ///   for the authenticated user
    /// * `repository` - Name and optional settings
    pub async fn create_repository(
        &self,
        org: Option<&str>,
        repository: &NewRepository,
    ) -> Result<Value> {
        self.execute_json(&request::create(org, repository)?).await
    }

    /// Update repository settings; only the fields set in `update` are sent
    pub async fn update_repository(
        &self,
        owner: &str,
        repo: &str,
        update: &RepositoryUpdate,
    ) -> Result<Value> {
        self.execute_json(&request::update(owner, repo, update)?).await
    }

    pub async fn delete_repository(&self, owner: &str, repo: &str) -> Result<()> {
        self.execute_unit(&request::delete(owner, repo)).await
    }

    pub async fn list_branches(
        &self,
        owner: &str,
        repo: &str,
        params: &BranchListParams,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(
            request::list_branches(owner, repo, params)?,
            listing,
            self.page_options(),
        )
        .await
    }

    pub async fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<Value> {
        self.execute_json(&request::get_branch(owner, repo, branch)).await
    }

    /// Topic names attached to a repository
    pub async fn get_repository_topics(&self, owner: &str, repo: &str) -> Result<Vec<String>> {
        let topics: Topics = self.execute_json(&request::topics(owner, repo)).await?;
        Ok(topics.names)
    }

    /// Get the latest published release of a repository
    ///
    /// # Returns
    /// The release object; a repository without releases is a 404 client error
    pub async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<Value> {
        self.execute_json(&request::latest_release(owner, repo)).await
    }

    pub async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(request::list_releases(owner, repo), listing, self.page_options())
            .await
    }

    /// Whether `user` is a collaborator on the repository
    pub async fn is_collaborator(&self, owner: &str, repo: &str, user: &str) -> Result<bool> {
        self.check(&request::check_collaborator(owner, repo, user)).await
    }
}
