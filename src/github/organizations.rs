//! Organizations, their members and teams

use super::client::GitHubClient;
use super::error::Result;
use super::pagination::Listing;
use super::request::RequestDescriptor;
use super::types::{MemberListParams, TeamMemberListParams};
use serde_json::Value;

/// Request builders for organization and team endpoints
pub mod request {
    use super::*;

    pub fn list_mine() -> RequestDescriptor {
        RequestDescriptor::get("/user/orgs")
    }

    pub fn get(org: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/orgs/{org}"))
    }

    pub fn list_members(org: &str, params: &MemberListParams) -> Result<RequestDescriptor> {
        RequestDescriptor::get(format!("/orgs/{org}/members")).query(params)
    }

    pub fn check_member(org: &str, user: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/orgs/{org}/members/{user}"))
    }

    pub fn list_teams(org: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/orgs/{org}/teams"))
    }

    pub fn get_team(org: &str, team_slug: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/orgs/{org}/teams/{team_slug}"))
    }

    pub fn list_team_members(
        org: &str,
        team_slug: &str,
        params: &TeamMemberListParams,
    ) -> Result<RequestDescriptor> {
        RequestDescriptor::get(format!("/orgs/{org}/teams/{team_slug}/members")).query(params)
    }
}

impl GitHubClient {
    /// Organizations the authenticated user belongs to
    pub async fn list_my_organizations(&self, listing: Listing) -> Result<Vec<Value>> {
        self.list(request::list_mine(), listing, self.page_options())
            .await
    }

    pub async fn get_organization(&self, org: &str) -> Result<Value> {
        self.execute_json(&request::get(org)).await
    }

    pub async fn list_organization_members(
        &self,
        org: &str,
        params: &MemberListParams,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(request::list_members(org, params)?, listing, self.page_options())
            .await
    }

    /// Whether `user` is a member of `org`
    ///
    /// Without visibility into the organization the API answers 302 to the
    /// public membership route, which is followed; a non-member is 404.
    pub async fn is_organization_member(&self, org: &str, user: &str) -> Result<bool> {
        self.check(&request::check_member(org, user)).await
    }

    pub async fn list_teams(&self, org: &str, listing: Listing) -> Result<Vec<Value>> {
        self.list(request::list_teams(org), listing, self.page_options())
            .await
    }

    pub async fn get_team(&self, org: &str, team_slug: &str) -> Result<Value> {
        self.execute_json(&request::get_team(org, team_slug)).await
    }

    pub async fn list_team_members(
        &self,
        org: &str,
        team_slug: &str,
        params: &TeamMemberListParams,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        self.list(
            request::list_team_members(org, team_slug, params)?,
            listing,
            self.page_options(),
        )
        .await
    }
}
