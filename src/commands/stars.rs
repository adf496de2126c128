//! Star command implementation

use super::output::{print_json, print_note, print_success};
use super::{Command, CommandContext, PageArgs};
use crate::github::{Direction, StarSort, StarredListParams};
use crate::utils::RepoSpec;
use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum StarsAction {
    /// List users who starred a repository
    List {
        repo: RepoSpec,

        /// Include when each user starred the repository
        #[arg(long)]
        timestamps: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print the stargazer count
    Count { repo: RepoSpec },

    /// Print the star timeline, oldest first
    History {
        repo: RepoSpec,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<u32>,
    },

    /// Check whether you starred a repository
    Check { repo: RepoSpec },

    /// Star a repository
    Star { repo: RepoSpec },

    /// Remove your star from a repository
    Unstar { repo: RepoSpec },

    /// List repositories starred by a user (you by default)
    Starred {
        #[arg(long)]
        user: Option<String>,

        #[arg(long, value_enum)]
        sort: Option<StarSort>,

        #[arg(long, value_enum)]
        direction: Option<Direction>,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Star command
pub struct StarsCommand {
    pub action: StarsAction,
}

#[async_trait]
impl Command for StarsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = &context.client;

        match &self.action {
            StarsAction::List {
                repo,
                timestamps,
                page,
            } => {
                let stargazers = client
                    .list_stargazers(&repo.owner, &repo.repo, *timestamps, page.listing())
                    .await?;
                print_json(&stargazers)?;
            }
            StarsAction::Count { repo } => {
                print_json(&client.stargazer_count(&repo.owner, &repo.repo).await?)?;
            }
            StarsAction::History { repo, max_pages } => {
                let history = client
                    .star_history(&repo.owner, &repo.repo, *max_pages)
                    .await?;
                if history.is_empty() {
                    print_note(&format!("No stars recorded for {repo}"));
                }
                print_json(&history)?;
            }
            StarsAction::Check { repo } => {
                print_json(&client.is_starred(&repo.owner, &repo.repo).await?)?;
            }
            StarsAction::Star { repo } => {
                client.star_repository(&repo.owner, &repo.repo).await?;
                print_success(&format!("Starred {repo}"));
            }
            StarsAction::Unstar { repo } => {
                client.unstar_repository(&repo.owner, &repo.repo).await?;
                print_success(&format!("Unstarred {repo}"));
            }
            StarsAction::Starred {
                user,
                sort,
                direction,
                page,
            } => {
                let params = StarredListParams {
                    sort: *sort,
                    direction: *direction,
                };
                let starred = client
                    .list_starred(user.as_deref(), &params, false, page.listing())
                    .await?;
                print_json(&starred)?;
            }
        }

        Ok(())
    }
}
