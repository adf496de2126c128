//! Stargazers and starring
//!
//! Star listings can carry `starred_at` timestamps when requested with the
//! star media type; [`GitHubClient::star_history`] builds on that.

use super::client::GitHubClient;
use super::error::Result;
use super::pagination::{Listing, PageOptions};
use super::request::{MediaType, RequestDescriptor};
use super::types::{StarEvent, StarredListParams};
use crate::constants::defaults;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

/// Request builders for star endpoints
pub mod request {
    use super::*;

    fn with_timestamps(request: RequestDescriptor, timestamps: bool) -> RequestDescriptor {
        if timestamps {
            request.accept(MediaType::StarTimestamps)
        } else {
            request
        }
    }

    pub fn list_stargazers(owner: &str, repo: &str, timestamps: bool) -> RequestDescriptor {
        with_timestamps(
            RequestDescriptor::get(format!("/repos/{owner}/{repo}/stargazers")),
            timestamps,
        )
    }

    pub fn star(owner: &str, repo: &str) -> RequestDescriptor {
        RequestDescriptor::put(format!("/user/starred/{owner}/{repo}"))
    }

    pub fn unstar(owner: &str, repo: &str) -> RequestDescriptor {
        RequestDescriptor::delete(format!("/user/starred/{owner}/{repo}"))
    }

    pub fn check_starred(owner: &str, repo: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/user/starred/{owner}/{repo}"))
    }

    /// Starred repositories of `user`, or of the authenticated user
    pub fn list_starred(
        user: Option<&str>,
        params: &StarredListParams,
        timestamps: bool,
    ) -> Result<RequestDescriptor> {
        let path = match user {
            Some(user) => format!("/users/{user}/starred"),
            None => "/user/starred".to_string(),
        };
        Ok(with_timestamps(RequestDescriptor::get(path).query(params)?, timestamps))
    }
}

/// Turn one timestamped stargazer entry into a [`StarEvent`].
///
/// Entries missing the user or the timestamp yield `None`.
pub fn star_event(entry: &Value) -> Option<StarEvent> {
    let user = entry.get("user")?;
    let user_id = user.get("id")?.as_u64()?;
    let login = user.get("login")?.as_str()?.to_string();
    let starred_at = entry
        .get("starred_at")?
        .as_str()?
        .parse::<DateTime<Utc>>()
        .ok()?;

    Some(StarEvent {
        user_id,
        login,
        starred_at,
    })
}

impl GitHubClient {
    /// List users who starred a repository
    ///
    /// # Arguments
    /// * `timestamps` - Request the star media type; each entry is then
    ///   `{"starred_at": ..., "user": {...}}` instead of a bare user
    pub async fn list_stargazers(
        &self,
        owner: &str,
        repo: &str,
        timestamps: bool,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(
            request::list_stargazers(owner, repo, timestamps),
            listing,
            self.page_options(),
        )
        .await
    }

    /// Star a repository for the authenticated user
    pub async fn star_repository(&self, owner: &str, repo: &str) -> Result<()> {
        self.execute_unit(&request::star(owner, repo)).await
    }

    pub async fn unstar_repository(&self, owner: &str, repo: &str) -> Result<()> {
        self.execute_unit(&request::unstar(owner, repo)).await
    }

    /// Whether the authenticated user has starred the repository
    pub async fn is_starred(&self, owner: &str, repo: &str) -> Result<bool> {
        self.check(&request::check_starred(owner, repo)).await
    }

    pub async fn list_starred(
        &self,
        user: Option<&str>,
        params: &StarredListParams,
        timestamps: bool,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(
            request::list_starred(user, params, timestamps)?,
            listing,
            self.page_options(),
        )
        .await
    }

    /// The repository's `stargazers_count`
    pub async fn stargazer_count(&self, owner: &str, repo: &str) -> Result<u64> {
        let repository = self.get_repository(owner, repo).await?;
        Ok(repository
            .get("stargazers_count")
            .and_then(Value::as_u64)
            .unwrap_or(0))
    }

    /// When each user starred the repository, oldest first
    ///
    /// # Arguments
    /// * `max_pages` - Pages to fetch at most; 100 when `None`. Each page
    ///   holds up to `per_page` entries.
    ///
    /// # Returns
    /// One event per stargazer that has both a user and a timestamp
    pub async fn star_history(
        &self,
        owner: &str,
        repo: &str,
        max_pages: Option<u32>,
    ) -> Result<Vec<StarEvent>> {
        let options = PageOptions::new(self.config.per_page)
            .with_max_pages(Some(max_pages.unwrap_or(defaults::STAR_HISTORY_MAX_PAGES)));
        let entries = self
            .paginate(request::list_stargazers(owner, repo, true), options)
            .await?;

        let total = entries.len();
        let events: Vec<StarEvent> = entries.iter().filter_map(star_event).collect();
        if events.len() < total {
            debug!(
                skipped = total - events.len(),
                "skipped stargazer entries without user or timestamp"
            );
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::{Direction, StarSort};
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_timestamp_media_type() {
        let req = request::list_stargazers("o", "r", true);
        assert_eq!(req.accept, Some(MediaType::StarTimestamps));

        let req = request::list_stargazers("o", "r", false);
        assert_eq!(req.accept, None);
    }

    #[test]
    fn test_star_routes() {
        let req = request::star("o", "r");
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.path, "/user/starred/o/r");
        assert!(req.body.is_none());

        assert_eq!(request::unstar("o", "r").method, Method::DELETE);
        assert_eq!(request::check_starred("o", "r").method, Method::GET);
    }

    #[test]
    fn test_list_starred_for_self_or_user() {
        let params = StarredListParams {
            sort: Some(StarSort::Updated),
            direction: Some(Direction::Asc),
        };
        let req = request::list_starred(None, &params, false).unwrap();
        assert_eq!(req.path, "/user/starred");
        assert_eq!(req.query_as::<StarredListParams>().unwrap(), params);

        let req = request::list_starred(Some("octocat"), &StarredListParams::default(), true).unwrap();
        assert_eq!(req.path, "/users/octocat/starred");
        assert_eq!(req.accept, Some(MediaType::StarTimestamps));
    }

    #[test]
    fn test_star_event_parsing() {
        let entry = json!({
            "starred_at": "2024-01-02T03:04:05Z",
            "user": {"id": 42, "login": "octocat"}
        });
        let event = star_event(&entry).unwrap();
        assert_eq!(event.user_id, 42);
        assert_eq!(event.login, "octocat");
        assert_eq!(event.starred_at.to_rfc3339(), "2024-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_incomplete_entries_skipped() {
        assert!(star_event(&json!({"user": {"id": 1, "login": "a"}})).is_none());
        assert!(star_event(&json!({"starred_at": "2024-01-02T03:04:05Z"})).is_none());
        assert!(star_event(&json!({"starred_at": "yesterday", "user": {"id": 1, "login": "a"}})).is_none());
        // A plain user object, as returned without the star media type.
        assert!(star_event(&json!({"id": 1, "login": "a"})).is_none());
    }
}
