//! Repository command implementation

use super::output::{print_json, print_success};
use super::{Command, CommandContext, PageArgs};
use crate::github::contents::decode_content;
use crate::github::{BranchListParams, Direction, RepoListParams, RepoSort, RepoType};
use crate::utils::RepoSpec;
use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;
use std::io::Write;

#[derive(Subcommand, Debug, Clone)]
pub enum RepoAction {
    /// Show repository metadata
    Get { repo: RepoSpec },

    /// List repositories of an organization or a user
    List {
        /// Organization whose repositories to list
        #[arg(long, conflicts_with = "user", required_unless_present = "user")]
        org: Option<String>,

        /// User whose public repositories to list
        #[arg(long)]
        user: Option<String>,

        #[arg(long = "type", value_enum)]
        repo_type: Option<RepoType>,

        #[arg(long, value_enum)]
        sort: Option<RepoSort>,

        #[arg(long, value_enum)]
        direction: Option<Direction>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List branches
    Branches {
        repo: RepoSpec,

        /// Only protected branches
        #[arg(long)]
        protected: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show repository topics
    Topics { repo: RepoSpec },

    /// List releases, or show the latest one
    Releases {
        repo: RepoSpec,

        #[arg(long)]
        latest: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print a file from the repository
    File {
        repo: RepoSpec,

        /// Path inside the repository
        path: String,

        /// Branch, tag or commit
        #[arg(long = "ref")]
        git_ref: Option<String>,

        /// Print the decoded file contents instead of the JSON object
        #[arg(long)]
        raw: bool,
    },

    /// Check whether a user is a collaborator
    Collaborator { repo: RepoSpec, user: String },

    /// Delete a repository
    Delete {
        repo: RepoSpec,

        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}

/// Repository command
pub struct RepoCommand {
    pub action: RepoAction,
}

#[async_trait]
impl Command for RepoCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = &context.client;

        match &self.action {
            RepoAction::Get { repo } => {
                print_json(&client.get_repository(&repo.owner, &repo.repo).await?)?;
            }
            RepoAction::List {
                org,
                user,
                repo_type,
                sort,
                direction,
                page,
            } => {
                let params = RepoListParams {
                    repo_type: *repo_type,
                    sort: *sort,
                    direction: *direction,
                };
                let repos = match (org, user) {
                    (Some(org), _) => {
                        client
                            .list_org_repositories(org, &params, page.listing())
                            .await?
                    }
                    (None, Some(user)) => {
                        client
                            .list_user_repositories(user, &params, page.listing())
                            .await?
                    }
                    (None, None) => anyhow::bail!("either --org or --user is required"),
                };
                print_json(&repos)?;
            }
            RepoAction::Branches {
                repo,
                protected,
                page,
            } => {
                let params = BranchListParams {
                    protected: protected.then_some(true),
                };
                let branches = client
                    .list_branches(&repo.owner, &repo.repo, &params, page.listing())
                    .await?;
                print_json(&branches)?;
            }
            RepoAction::Topics { repo } => {
                print_json(&client.get_repository_topics(&repo.owner, &repo.repo).await?)?;
            }
            RepoAction::Releases { repo, latest, page } => {
                if *latest {
                    print_json(&client.get_latest_release(&repo.owner, &repo.repo).await?)?;
                } else {
                    let releases = client
                        .list_releases(&repo.owner, &repo.repo, page.listing())
                        .await?;
                    print_json(&releases)?;
                }
            }
            RepoAction::File {
                repo,
                path,
                git_ref,
                raw,
            } => {
                let file = client
                    .get_content(&repo.owner, &repo.repo, path, git_ref.as_deref())
                    .await?;
                if *raw {
                    let bytes = decode_content(&file)?;
                    std::io::stdout().write_all(&bytes)?;
                } else {
                    print_json(&file)?;
                }
            }
            RepoAction::Collaborator { repo, user } => {
                let is_collaborator = client
                    .is_collaborator(&repo.owner, &repo.repo, user)
                    .await?;
                print_json(&is_collaborator)?;
            }
            RepoAction::Delete { repo, yes } => {
                if !yes {
                    anyhow::bail!("refusing to delete {repo} without --yes");
                }
                client.delete_repository(&repo.owner, &repo.repo).await?;
                print_success(&format!("Deleted {repo}"));
            }
        }

        Ok(())
    }
}
