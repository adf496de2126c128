//! GitHub Actions workflow command implementation

use super::output::print_json;
use super::{Command, CommandContext, PageArgs};
use crate::github::{WorkflowId, WorkflowRunListParams};
use crate::utils::RepoSpec;
use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum WorkflowsAction {
    /// List workflows
    List {
        repo: RepoSpec,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a workflow by id or file name
    Get {
        repo: RepoSpec,
        workflow: WorkflowId,
    },

    /// List workflow runs
    Runs {
        repo: RepoSpec,

        /// Only runs of this workflow (id or file name)
        #[arg(long)]
        workflow: Option<WorkflowId>,

        #[arg(long)]
        branch: Option<String>,

        /// e.g. completed, in_progress, failure
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        event: Option<String>,

        #[arg(long)]
        actor: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
}

pub struct WorkflowsCommand {
    pub action: WorkflowsAction,
}

#[async_trait]
impl Command for WorkflowsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = &context.client;

        match &self.action {
            WorkflowsAction::List { repo, page } => {
                let workflows = client
                    .list_workflows(&repo.owner, &repo.repo, page.listing())
                    .await?;
                print_json(&workflows)?;
            }
            WorkflowsAction::Get { repo, workflow } => {
                let workflow = client
                    .get_workflow(&repo.owner, &repo.repo, workflow)
                    .await?;
                print_json(&workflow)?;
            }
            WorkflowsAction::Runs {
                repo,
                workflow,
                branch,
                status,
                event,
                actor,
                page,
            } => {
                let params = WorkflowRunListParams {
                    actor: actor.clone(),
                    branch: branch.clone(),
                    event: event.clone(),
                    status: status.clone(),
                };
                let runs = client
                    .list_workflow_runs(
                        &repo.owner,
                        &repo.repo,
                        workflow.as_ref(),
                        &params,
                        page.listing(),
                    )
                    .await?;
                print_json(&runs)?;
            }
        }

        Ok(())
    }
}
