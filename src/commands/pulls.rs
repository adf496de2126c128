//! Pull request command implementation

use super::output::{print_json, print_note};
use super::{Command, CommandContext, PageArgs};
use crate::github::{
    Direction, MergeMethod, MergeOptions, NewPullRequest, PullRequestListParams, PullSort,
    StateFilter,
};
use crate::utils::RepoSpec;
use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum PullsAction {
    /// List pull requests
    List {
        repo: RepoSpec,

        #[arg(long, value_enum)]
        state: Option<StateFilter>,

        /// Filter by head, as `user:branch`
        #[arg(long)]
        head: Option<String>,

        #[arg(long)]
        base: Option<String>,

        #[arg(long, value_enum)]
        sort: Option<PullSort>,

        #[arg(long, value_enum)]
        direction: Option<Direction>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one pull request
    Get { repo: RepoSpec, number: u64 },

    /// Open a pull request
    Create {
        repo: RepoSpec,

        #[arg(long)]
        title: String,

        /// Branch containing the changes
        #[arg(long)]
        head: String,

        /// Branch to merge into
        #[arg(long, default_value = "main")]
        base: String,

        #[arg(long)]
        body: Option<String>,

        #[arg(long)]
        draft: bool,
    },

    /// Merge a pull request
    Merge {
        repo: RepoSpec,
        number: u64,

        #[arg(long, value_enum)]
        method: Option<MergeMethod>,

        /// Only merge if the head is still at this commit
        #[arg(long)]
        sha: Option<String>,
    },

    /// Check whether a pull request has been merged
    Merged { repo: RepoSpec, number: u64 },
}

/// Pull request command
pub struct PullsCommand {
    pub action: PullsAction,
}

#[async_trait]
impl Command for PullsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = &context.client;

        match &self.action {
            PullsAction::List {
                repo,
                state,
                head,
                base,
                sort,
                direction,
                page,
            } => {
                let params = PullRequestListParams {
                    state: *state,
                    head: head.clone(),
                    base: base.clone(),
                    sort: *sort,
                    direction: *direction,
                };
                let pulls = client
                    .list_pull_requests(&repo.owner, &repo.repo, &params, page.listing())
                    .await?;
                print_json(&pulls)?;
            }
            PullsAction::Get { repo, number } => {
                let pull = client
                    .get_pull_request(&repo.owner, &repo.repo, *number)
                    .await?;
                print_json(&pull)?;
            }
            PullsAction::Create {
                repo,
                title,
                head,
                base,
                body,
                draft,
            } => {
                let mut pull = NewPullRequest::new(title, head, base);
                if let Some(body) = body {
                    pull = pull.with_body(body);
                }
                if *draft {
                    pull = pull.as_draft();
                }
                let created = client
                    .create_pull_request(&repo.owner, &repo.repo, &pull)
                    .await?;
                print_json(&created)?;
            }
            PullsAction::Merge {
                repo,
                number,
                method,
                sha,
            } => {
                let options = MergeOptions {
                    merge_method: *method,
                    sha: sha.clone(),
                    ..MergeOptions::default()
                };
                let result = client
                    .merge_pull_request(&repo.owner, &repo.repo, *number, &options)
                    .await?;
                print_json(&result)?;
            }
            PullsAction::Merged { repo, number } => {
                let merged = client
                    .is_pull_request_merged(&repo.owner, &repo.repo, *number)
                    .await?;
                if !merged {
                    print_note(&format!("{repo}#{number} is not merged"));
                }
                print_json(&merged)?;
            }
        }

        Ok(())
    }
}
