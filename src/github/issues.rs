//! Issue API operations
//!
//! Issues, their assignees and lock state, and issue comments. The issue
//! listing also returns pull requests, which the API models as issues.

use super::client::GitHubClient;
use super::error::Result;
use super::pagination::Listing;
use super::request::RequestDescriptor;
use super::types::{IssueListParams, IssueUpdate, LockReason, NewIssue};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct Lock {
    lock_reason: LockReason,
}

#[derive(Serialize)]
struct Assignees<'a> {
    assignees: Vec<&'a str>,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

/// Request builders for issue endpoints
pub mod request {
    use super::*;

    fn issue_path(owner: &str, repo: &str, number: u64) -> String {
        format!("/repos/{owner}/{repo}/issues/{number}")
    }

    pub fn list(owner: &str, repo: &str, params: &IssueListParams) -> Result<RequestDescriptor> {
        RequestDescriptor::get(format!("/repos/{owner}/{repo}/issues")).query(params)
    }

    pub fn get(owner: &str, repo: &str, number: u64) -> RequestDescriptor {
        RequestDescriptor::get(issue_path(owner, repo, number))
    }

    pub fn create(owner: &str, repo: &str, issue: &NewIssue) -> Result<RequestDescriptor> {
        RequestDescriptor::post(format!("/repos/{owner}/{repo}/issues")).json(issue)
    }

    pub fn update(
        owner: &str,
        repo: &str,
        number: u64,
        update: &IssueUpdate,
    ) -> Result<RequestDescriptor> {
        RequestDescriptor::patch(issue_path(owner, repo, number)).json(update)
    }

    /// Lock a conversation; the body is omitted without a reason
    pub fn lock(
        owner: &str,
        repo: &str,
        number: u64,
        reason: Option<LockReason>,
    ) -> Result<RequestDescriptor> {
        let request = RequestDescriptor::put(format!("{}/lock", issue_path(owner, repo, number)));
        match reason {
            Some(lock_reason) => request.json(&Lock { lock_reason }),
            None => Ok(request),
        }
    }

    pub fn unlock(owner: &str, repo: &str, number: u64) -> RequestDescriptor {
        RequestDescriptor::delete(format!("{}/lock", issue_path(owner, repo, number)))
    }

    pub fn add_assignees(
        owner: &str,
        repo: &str,
        number: u64,
        assignees: &[&str],
    ) -> Result<RequestDescriptor> {
        RequestDescriptor::post(format!("{}/assignees", issue_path(owner, repo, number))).json(
            &Assignees {
                assignees: assignees.to_vec(),
            },
        )
    }

    pub fn remove_assignees(
        owner: &str,
        repo: &str,
        number: u64,
        assignees: &[&str],
    ) -> Result<RequestDescriptor> {
        RequestDescriptor::delete(format!("{}/assignees", issue_path(owner, repo, number))).json(
            &Assignees {
                assignees: assignees.to_vec(),
            },
        )
    }

    pub fn list_comments(owner: &str, repo: &str, number: u64) -> RequestDescriptor {
        RequestDescriptor::get(format!("{}/comments", issue_path(owner, repo, number)))
    }

    pub fn create_comment(
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<RequestDescriptor> {
        RequestDescriptor::post(format!("{}/comments", issue_path(owner, repo, number)))
            .json(&CommentBody { body })
    }

    pub fn update_comment(
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<RequestDescriptor> {
        RequestDescriptor::patch(format!("/repos/{owner}/{repo}/issues/comments/{comment_id}"))
            .json(&CommentBody { body })
    }

    pub fn delete_comment(owner: &str, repo: &str, comment_id: u64) -> RequestDescriptor {
        RequestDescriptor::delete(format!("/repos/{owner}/{repo}/issues/comments/{comment_id}"))
    }
}

impl GitHubClient {
    /// List issues in a repository
    ///
    /// # Arguments
    /// * `params` - State, label, sort and user filters
    /// * `listing` - Sweep every page or fetch a single one
    pub async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        params: &IssueListParams,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(request::list(owner, repo, params)?, listing, self.page_options())
            .await
    }

    pub async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        self.execute_json(&request::get(owner, repo, number)).await
    }

    /// Open a new issue
    ///
    /// # Example
    /// ```rust,no_run
    /// use ghrest::github::{GitHubClient, NewIssue};
    ///
    /// # async fn example() -> ghrest::github::Result<()> {
    /// let client = GitHubClient::new(None)?;
    /// let issue = client
    ///     .create_issue("octocat", "Hello-World", &NewIssue::new("Found a bug"))
    ///     .await?;
    /// println!("#{}", issue["number"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_issue(&self, owner: &str, repo: &str, issue: &NewIssue) -> Result<Value> {
        self.execute_json(&request::create(owner, repo, issue)?).await
    }

    /// Update an issue; only the fields set in `update` are sent
    pub async fn update_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &IssueUpdate,
    ) -> Result<Value> {
        self.execute_json(&request::update(owner, repo, number, update)?)
            .await
    }

    pub async fn lock_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        reason: Option<LockReason>,
    ) -> Result<()> {
        self.execute_unit(&request::lock(owner, repo, number, reason)?)
            .await
    }

    pub async fn unlock_issue(&self, owner: &str, repo: &str, number: u64) -> Result<()> {
        self.execute_unit(&request::unlock(owner, repo, number)).await
    }

    /// Add assignees; returns the updated issue
    pub async fn add_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        assignees: &[&str],
    ) -> Result<Value> {
        self.execute_json(&request::add_assignees(owner, repo, number, assignees)?)
            .await
    }

    /// Remove assignees; returns the updated issue
    pub async fn remove_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        assignees: &[&str],
    ) -> Result<Value> {
        self.execute_json(&request::remove_assignees(owner, repo, number, assignees)?)
            .await
    }

    pub async fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(
            request::list_comments(owner, repo, number),
            listing,
            self.page_options(),
        )
        .await
    }

    pub async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<Value> {
        self.execute_json(&request::create_comment(owner, repo, number, body)?)
            .await
    }

    pub async fn update_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<Value> {
        self.execute_json(&request::update_comment(owner, repo, comment_id, body)?)
            .await
    }

    pub async fn delete_issue_comment(&self, owner: &str, repo: &str, comment_id: u64) -> Result<()> {
        self.execute_unit(&request::delete_comment(owner, repo, comment_id))
            .await
    }
}
