use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use ghrest::commands::*;
use ghrest::config::{ClientConfig, ConfigFile};
use ghrest::github::{AuthScheme, Direction, GitHubClient, TrendingWindow};
use ghrest::{constants, utils};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ghrest")]
#[command(about = "A command line client for the GitHub REST API")]
#[command(version)]
struct Cli {
    /// GitHub token (falls back to GITHUB_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// API base URL, e.g. for GitHub Enterprise (falls back to GITHUB_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
    config: String,

    /// How the token is presented in the Authorization header
    #[arg(long, global = true, value_enum)]
    auth_scheme: Option<AuthScheme>,

    /// Retries for transient failures
    #[arg(long, global = true)]
    max_retries: Option<u32>,

    /// Log requests and retries to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Repository metadata, branches, releases and files
    Repo {
        #[command(subcommand)]
        action: RepoAction,
    },

    /// Stargazers, starring and star history
    Stars {
        #[command(subcommand)]
        action: StarsAction,
    },

    /// Issues and issue comments
    Issues {
        #[command(subcommand)]
        action: IssuesAction,
    },

    /// Pull requests
    Pulls {
        #[command(subcommand)]
        action: PullsAction,
    },

    /// Organizations and teams
    Orgs {
        #[command(subcommand)]
        action: OrgsAction,
    },

    /// User profiles
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// GitHub Actions workflows and runs
    Workflows {
        #[command(subcommand)]
        action: WorkflowsAction,
    },

    /// Search repositories
    Search {
        /// Search qualifiers, e.g. "tokio language:rust"
        query: String,

        /// stars, forks, help-wanted-issues or updated
        #[arg(long)]
        sort: Option<String>,

        #[arg(long, value_enum)]
        order: Option<Direction>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Recently created repositories with the most stars
    Trending {
        #[arg(short, long)]
        language: Option<String>,

        #[arg(short, long, value_enum, default_value_t = TrendingWindow::Daily)]
        window: TrendingWindow,

        #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    let context = CommandContext {
        client: GitHubClient::with_config(config)?,
    };

    match cli.command {
        Commands::Repo { action } => RepoCommand { action }.execute(&context).await,
        Commands::Stars { action } => StarsCommand { action }.execute(&context).await,
        Commands::Issues { action } => IssuesCommand { action }.execute(&context).await,
        Commands::Pulls { action } => PullsCommand { action }.execute(&context).await,
        Commands::Orgs { action } => OrgsCommand { action }.execute(&context).await,
        Commands::Users { action } => UsersCommand { action }.execute(&context).await,
        Commands::Workflows { action } => WorkflowsCommand { action }.execute(&context).await,
        Commands::Search {
            query,
            sort,
            order,
            page,
        } => {
            SearchCommand {
                query,
                sort,
                order,
                page,
            }
            .execute(&context)
            .await
        }
        Commands::Trending {
            language,
            window,
            limit,
        } => {
            TrendingCommand {
                language,
                window,
                limit,
            }
            .execute(&context)
            .await
        }
    }
}

/// Flags win over the config file, which wins over the environment
fn build_config(cli: &Cli) -> Result<ClientConfig> {
    let file = ConfigFile::load_optional(&cli.config)?;

    let mut builder = ClientConfig::builder();
    if let Some(token) = &cli.token {
        builder = builder.token(token);
    }
    if let Some(url) = &cli.api_url {
        builder = builder.base_url(url);
    }
    if let Some(scheme) = cli.auth_scheme {
        builder = builder.auth_scheme(scheme);
    }
    if let Some(max_retries) = cli.max_retries {
        builder = builder.max_retries(max_retries);
    }

    Ok(builder.with_file(&file).with_env().build()?)
}
