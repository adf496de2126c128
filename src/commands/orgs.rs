//! Organization command implementation

use super::output::print_json;
use super::{Command, CommandContext, PageArgs};
use crate::github::{MemberListParams, MemberRole, TeamMemberListParams, TeamRole};
use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum OrgsAction {
    /// List your organizations
    Mine {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show an organization
    Get { org: String },

    /// List organization members
    Members {
        org: String,

        #[arg(long, value_enum)]
        role: Option<MemberRole>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Check whether a user belongs to an organization
    Member { org: String, user: String },

    /// List teams
    Teams {
        org: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a team by slug
    Team { org: String, team: String },

    /// List members of a team
    TeamMembers {
        org: String,
        team: String,

        #[arg(long, value_enum)]
        role: Option<TeamRole>,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Organization command
pub struct OrgsCommand {
    pub action: OrgsAction,
}

#[async_trait]
impl Command for OrgsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = &context.client;

        match &self.action {
            OrgsAction::Mine { page } => {
                print_json(&client.list_my_organizations(page.listing()).await?)?;
            }
            OrgsAction::Get { org } => {
                print_json(&client.get_organization(org).await?)?;
            }
            OrgsAction::Members { org, role, page } => {
                let params = MemberListParams { role: *role };
                let members = client
                    .list_organization_members(org, &params, page.listing())
                    .await?;
                print_json(&members)?;
            }
            OrgsAction::Member { org, user } => {
                print_json(&client.is_organization_member(org, user).await?)?;
            }
            OrgsAction::Teams { org, page } => {
                print_json(&client.list_teams(org, page.listing()).await?)?;
            }
            OrgsAction::Team { org, team } => {
                print_json(&client.get_team(org, team).await?)?;
            }
            OrgsAction::TeamMembers {
                org,
                team,
                role,
                page,
            } => {
                let params = TeamMemberListParams { role: *role };
                let members = client
                    .list_team_members(org, team, &params, page.listing())
                    .await?;
                print_json(&members)?;
            }
        }

        Ok(())
    }
}
