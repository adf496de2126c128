//! User command implementation

use super::output::print_json;
use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum UsersAction {
    /// Show the authenticated user
    Me,

    /// Show a user's public profile
    Get { username: String },
}

pub struct UsersCommand {
    pub action: UsersAction,
}

#[async_trait]
impl Command for UsersCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let user = match &self.action {
            UsersAction::Me => {
                if !context.client.is_authenticated() {
                    anyhow::bail!("`users me` needs a token (--token or GITHUB_TOKEN)");
                }
                context.client.get_authenticated_user().await?
            }
            UsersAction::Get { username } => context.client.get_user(username).await?,
        };
        print_json(&user)
    }
}
