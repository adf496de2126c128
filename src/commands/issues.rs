//! Issue command implementation

use super::output::{print_json, print_success};
use super::{Command, CommandContext, PageArgs};
use crate::github::{
    Direction, IssueListParams, IssueSort, IssueUpdate, LockReason, NewIssue, State, StateFilter,
};
use crate::utils::RepoSpec;
use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum IssuesAction {
    /// List issues
    List {
        repo: RepoSpec,

        #[arg(long, value_enum)]
        state: Option<StateFilter>,

        /// Comma-separated label names
        #[arg(long)]
        labels: Option<String>,

        #[arg(long)]
        assignee: Option<String>,

        #[arg(long, value_enum)]
        sort: Option<IssueSort>,

        #[arg(long, value_enum)]
        direction: Option<Direction>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one issue
    Get { repo: RepoSpec, number: u64 },

    /// Open an issue
    Create {
        repo: RepoSpec,

        #[arg(long)]
        title: String,

        #[arg(long)]
        body: Option<String>,

        /// Label to apply (repeatable)
        #[arg(long = "label")]
        labels: Vec<String>,

        /// User to assign (repeatable)
        #[arg(long = "assignee")]
        assignees: Vec<String>,
    },

    /// Close an issue
    Close { repo: RepoSpec, number: u64 },

    /// Reopen an issue
    Reopen { repo: RepoSpec, number: u64 },

    /// Comment on an issue
    Comment {
        repo: RepoSpec,
        number: u64,
        body: String,
    },

    /// List comments on an issue
    Comments {
        repo: RepoSpec,
        number: u64,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Lock the conversation on an issue
    Lock {
        repo: RepoSpec,
        number: u64,

        #[arg(long, value_enum)]
        reason: Option<LockReason>,
    },

    /// Unlock the conversation on an issue
    Unlock { repo: RepoSpec, number: u64 },
}

/// Issue command
pub struct IssuesCommand {
    pub action: IssuesAction,
}

impl IssuesCommand {
    async fn set_state(
        &self,
        context: &CommandContext,
        repo: &RepoSpec,
        number: u64,
        state: State,
    ) -> Result<()> {
        let update = IssueUpdate {
            state: Some(state),
            ..IssueUpdate::default()
        };
        let issue = context
            .client
            .update_issue(&repo.owner, &repo.repo, number, &update)
            .await?;
        print_json(&issue)
    }
}

#[async_trait]
impl Command for IssuesCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = &context.client;

        match &self.action {
            IssuesAction::List {
                repo,
                state,
                labels,
                assignee,
                sort,
                direction,
                page,
            } => {
                let params = IssueListParams {
                    state: *state,
                    labels: labels.clone(),
                    assignee: assignee.clone(),
                    sort: *sort,
                    direction: *direction,
                    ..IssueListParams::default()
                };
                let issues = client
                    .list_issues(&repo.owner, &repo.repo, &params, page.listing())
                    .await?;
                print_json(&issues)?;
            }
            IssuesAction::Get { repo, number } => {
                print_json(&client.get_issue(&repo.owner, &repo.repo, *number).await?)?;
            }
            IssuesAction::Create {
                repo,
                title,
                body,
                labels,
                assignees,
            } => {
                let mut issue = NewIssue::new(title);
                if let Some(body) = body {
                    issue = issue.with_body(body);
                }
                if !labels.is_empty() {
                    issue = issue.with_labels(labels.clone());
                }
                if !assignees.is_empty() {
                    issue = issue.with_assignees(assignees.clone());
                }
                print_json(&client.create_issue(&repo.owner, &repo.repo, &issue).await?)?;
            }
            IssuesAction::Close { repo, number } => {
                self.set_state(context, repo, *number, State::Closed).await?;
            }
            IssuesAction::Reopen { repo, number } => {
                self.set_state(context, repo, *number, State::Open).await?;
            }
            IssuesAction::Comment { repo, number, body } => {
                let comment = client
                    .create_issue_comment(&repo.owner, &repo.repo, *number, body)
                    .await?;
                print_json(&comment)?;
            }
            IssuesAction::Comments { repo, number, page } => {
                let comments = client
                    .list_issue_comments(&repo.owner, &repo.repo, *number, page.listing())
                    .await?;
                print_json(&comments)?;
            }
            IssuesAction::Lock {
                repo,
                number,
                reason,
            } => {
                client
                    .lock_issue(&repo.owner, &repo.repo, *number, *reason)
                    .await?;
                print_success(&format!("Locked {repo}#{number}"));
            }
            IssuesAction::Unlock { repo, number } => {
                client.unlock_issue(&repo.owner, &repo.repo, *number).await?;
                print_success(&format!("Unlocked {repo}#{number}"));
            }
        }

        Ok(())
    }
}
