//! Parameter and payload types for the endpoint wrappers
//!
//! Optional fields are omitted from the wire representation when `None`.
//! Fields that the API allows to be cleared use `Option<Option<T>>`:
//! `None` leaves the field untouched, `Some(None)` sends an explicit `null`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// State filter for issue and pull request listings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StateFilter {
    #[default]
    Open,
    Closed,
    All,
}

/// State of a single issue or pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IssueSort {
    Created,
    Updated,
    Comments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PullSort {
    Created,
    Updated,
    Popularity,
    LongRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Created,
    Updated,
    Pushed,
    FullName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    All,
    Owner,
    Public,
    Private,
    Forks,
    Sources,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StarSort {
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    Merge,
    Squash,
    Rebase,
}

/// Reason recorded when locking an issue conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum LockReason {
    #[serde(rename = "off-topic")]
    OffTopic,
    #[serde(rename = "too heated")]
    TooHeated,
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(rename = "spam")]
    Spam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    All,
    Admin,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    All,
    Maintainer,
    Member,
}

// ---------------------------------------------------------------------------
// Repositories
// ---------------------------------------------------------------------------

/// Filters for organization and user repository listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoListParams {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub repo_type: Option<RepoType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<RepoSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
}

/// Payload for creating a repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRepository {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_init: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,
}

impl NewRepository {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = Some(private);
        self
    }

    pub fn auto_init(mut self) -> Self {
        self.auto_init = Some(true);
        self
    }
}

/// Partial update of a repository's settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub homepage: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,
}

// ---------------------------------------------------------------------------
// Contents
// ---------------------------------------------------------------------------

/// A file write. `content` is plain text; it is base64-encoded on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpdate {
    pub message: String,
    pub content: Vec<u8>,
    pub branch: Option<String>,
    /// Blob SHA of the file being replaced; required for updates
    pub sha: Option<String>,
}

impl FileUpdate {
    pub fn new(message: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            message: message.into(),
            content: content.into(),
            branch: None,
            sha: None,
        }
    }

    pub fn on_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn replacing(mut self, sha: impl Into<String>) -> Self {
        self.sha = Some(sha.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateFilter>,
    /// Comma-separated label names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<IssueSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// ISO 8601 timestamp; only issues updated after it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentioned: Option<String>,
}

/// Payload for opening an issue; only `title` is required
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewIssue {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
}

impl NewIssue {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_assignees(mut self, assignees: Vec<String>) -> Self {
        self.assignees = Some(assignees);
        self
    }
}

/// Partial update of an issue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub body: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub milestone: Option<Option<u64>>,
}

// ---------------------------------------------------------------------------
// Pull requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PullRequestListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateFilter>,
    /// `user:ref-name` filter on the head branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<PullSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// Payload for opening a pull request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPullRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}

impl NewPullRequest {
    pub fn new(title: impl Into<String>, head: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn as_draft(mut self) -> Self {
        self.draft = Some(true);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PullRequestUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub body: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer_can_modify: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    /// Head SHA the merge must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_method: Option<MergeMethod>,
}

// ---------------------------------------------------------------------------
// Stars, organizations, workflows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarredListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<StarSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// One entry of a repository's star history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarEvent {
    pub user_id: u64,
    pub login: String,
    pub starred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRole>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<TeamRole>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRunListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// e.g. `completed`, `in_progress`, `success`, `failure`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A workflow addressed by numeric id or by file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowId {
    Id(u64),
    File(String),
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowId::Id(id) => write!(f, "{id}"),
            WorkflowId::File(name) => f.write_str(name),
        }
    }
}

impl From<u64> for WorkflowId {
    fn from(id: u64) -> Self {
        WorkflowId::Id(id)
    }
}

impl From<&str> for WorkflowId {
    fn from(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| WorkflowId::File(name.to_string()))
    }
}

impl FromStr for WorkflowId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(id) => WorkflowId::Id(id),
            Err(_) => WorkflowId::File(s.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Repository search parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub q: String,
    /// `stars`, `forks`, `help-wanted-issues` or `updated`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Direction>,
}

impl SearchParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }
}

/// Look-back window for trending repositories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TrendingWindow {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl TrendingWindow {
    pub fn days(self) -> u64 {
        match self {
            TrendingWindow::Daily => 1,
            TrendingWindow::Weekly => 7,
            TrendingWindow::Monthly => 30,
        }
    }
}

/// Approximation of "trending": recently created repositories ranked by
/// stars. The API has no trending endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingQuery {
    pub language: Option<String>,
    pub window: TrendingWindow,
    pub limit: u32,
}

impl Default for TrendingQuery {
    fn default() -> Self {
        Self {
            language: None,
            window: TrendingWindow::Daily,
            limit: 25,
        }
    }
}

impl TrendingQuery {
    /// The search qualifier string for repositories created since the
    /// window opened, counted back from `today`
    pub fn search_query(&self, today: NaiveDate) -> String {
        let since = today
            .checked_sub_days(chrono::Days::new(self.window.days()))
            .unwrap_or(today);
        let mut query = format!("stars:>1 created:>={}", since.format("%Y-%m-%d"));
        if let Some(language) = &self.language {
            query.push_str(&format!(" language:{language}"));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_new_issue_serializes_only_set_fields() {
        let value = serde_json::to_value(NewIssue::new("Bug")).unwrap();
        assert_eq!(value, json!({"title": "Bug"}));
    }

    #[test]
    fn test_clearable_field_sends_null() {
        let update = IssueUpdate {
            body: Some(None),
            milestone: Some(None),
            ..IssueUpdate::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({"body": null, "milestone": null}));

        let back: IssueUpdate = serde_json::from_value(value).unwrap();
        assert_eq!(back, update);

        let empty: IssueUpdate = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, IssueUpdate::default());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(PullSort::LongRunning).unwrap(), json!("long-running"));
        assert_eq!(serde_json::to_value(RepoSort::FullName).unwrap(), json!("full_name"));
        assert_eq!(serde_json::to_value(LockReason::TooHeated).unwrap(), json!("too heated"));
        assert_eq!(serde_json::to_value(LockReason::OffTopic).unwrap(), json!("off-topic"));
        assert_eq!(serde_json::to_value(StateFilter::All).unwrap(), json!("all"));
    }

    #[test]
    fn test_repo_type_renamed() {
        let params = RepoListParams {
            repo_type: Some(RepoType::Sources),
            ..RepoListParams::default()
        };
        let value: Value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({"type": "sources"}));
    }

    #[test]
    fn test_workflow_id_parsing() {
        assert_eq!(WorkflowId::from("1234"), WorkflowId::Id(1234));
        assert_eq!(WorkflowId::from("ci.yml"), WorkflowId::File("ci.yml".to_string()));
        assert_eq!(WorkflowId::Id(9).to_string(), "9");
    }

    #[test]
    fn test_trending_query() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let query = TrendingQuery {
            language: Some("rust".to_string()),
            window: TrendingWindow::Weekly,
            limit: 5,
        };
        assert_eq!(
            query.search_query(today),
            "stars:>1 created:>=2024-03-03 language:rust"
        );
        assert_eq!(
            TrendingQuery::default().search_query(today),
            "stars:>1 created:>=2024-03-09"
        );
    }
}
