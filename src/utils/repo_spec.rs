//! Repository references given on the command line

use crate::github::error::{GitHubError, Result};
use std::fmt;
use std::str::FromStr;

/// An `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub owner: String,
    pub repo: String,
}

impl RepoSpec {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoSpec {
    type Err = GitHubError;

    /// Accepts `owner/repo` as well as any URL form [`parse_github_url`] knows
    fn from_str(s: &str) -> Result<Self> {
        let (owner, repo) = parse_github_url(s)?;
        Ok(Self { owner, repo })
    }
}

/// Parse a repository reference to extract owner and repository name
///
/// Supports various formats:
/// - Short: `owner/repo`
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git` (any host, e.g. an Enterprise server)
/// - Legacy: `github.com/owner/repo`
///
/// # Arguments
/// * `url` - The repository reference to parse
///
/// # Returns
/// A tuple containing (owner, repository_name)
///
/// # Errors
/// Returns an error if the format is not recognized
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let trimmed = url.trim();
    let url = trimmed.trim_end_matches('/').trim_end_matches(".git");

    let pair = |owner: &str, repo: &str| -> Option<(String, String)> {
        let valid = |s: &str| !s.is_empty() && !s.contains(char::is_whitespace);
        (valid(owner) && valid(repo)).then(|| (owner.to_string(), repo.to_string()))
    };

    // SSH: git@github.com:owner/repo or git@github-enterprise:owner/repo
    if url.starts_with("git@")
        && let Some((_, path)) = url.split_once(':')
        && let Some((owner, repo)) = path.split_once('/')
        && let Some(found) = pair(owner, repo)
    {
        return Ok(found);
    }

    // HTTPS: https://github.com/owner/repo[/more] or https://github-enterprise/owner/repo
    if let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() >= 3
            && let Some(found) = pair(parts[1], parts[2])
        {
            return Ok(found);
        }
    }

    // Legacy: github.com/owner/repo
    if !url.contains("://") && url.contains("github.com") {
        let parts: Vec<&str> = url.split('/').collect();
        if parts.len() >= 3 {
            let idx = parts.len() - 2;
            if let Some(found) = pair(parts[idx], parts[idx + 1]) {
                return Ok(found);
            }
        }
    }

    // Short form: owner/repo
    if !url.contains(':')
        && let Some((owner, repo)) = url.split_once('/')
        && !repo.contains('/')
        && let Some(found) = pair(owner, repo)
    {
        return Ok(found);
    }

    Err(GitHubError::InvalidConfig(format!(
        "invalid repository reference '{trimmed}' (expected owner/repo or a GitHub URL)"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_form() {
        let spec: RepoSpec = "rust-lang/rust".parse().unwrap();
        assert_eq!(spec, RepoSpec::new("rust-lang", "rust"));
        assert_eq!(spec.to_string(), "rust-lang/rust");
    }

    #[test]
    fn test_parse_ssh_url() {
        let (owner, repo) = parse_github_url("git@github.com:owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_ssh_enterprise() {
        let (owner, repo) = parse_github_url("git@github-enterprise:nicos_backbase/journey").unwrap();
        assert_eq!(owner, "nicos_backbase");
        assert_eq!(repo, "journey");
    }

    #[test]
    fn test_parse_https_url() {
        let (owner, repo) = parse_github_url("https://github.com/owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");

        let (owner, repo) = parse_github_url("https://github.com/owner/repo/pulls/").unwrap();
        assert_eq!((owner.as_str(), repo.as_str()), ("owner", "repo"));
    }

    #[test]
    fn test_parse_legacy_url() {
        let (owner, repo) = parse_github_url("github.com/owner/repo").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_invalid_references() {
        assert!(parse_github_url("").is_err());
        assert!(parse_github_url("just-a-name").is_err());
        assert!(parse_github_url("a/b/c").is_err());
        assert!(parse_github_url("https://github.com/owner").is_err());
        assert!(parse_github_url("/repo").is_err());
    }
}
