//! Command implementations for the ghrest CLI

pub mod base;
pub mod issues;
pub mod orgs;
pub mod output;
pub mod pulls;
pub mod repo;
pub mod stars;
pub mod trending;
pub mod users;
pub mod workflows;

pub use base::{Command, CommandContext, PageArgs};
pub use issues::{IssuesAction, IssuesCommand};
pub use orgs::{OrgsAction, OrgsCommand};
pub use pulls::{PullsAction, PullsCommand};
pub use repo::{RepoAction, RepoCommand};
pub use stars::{StarsAction, StarsCommand};
pub use trending::{SearchCommand, TrendingCommand};
pub use users::{UsersAction, UsersCommand};
pub use workflows::{WorkflowsAction, WorkflowsCommand};
