//! User lookups

use super::client::GitHubClient;
use super::error::Result;
use super::request::RequestDescriptor;
use serde_json::Value;

pub mod request {
    use super::*;

    pub fn authenticated() -> RequestDescriptor {
        RequestDescriptor::get("/user")
    }

    pub fn get(username: &str) -> RequestDescriptor {
        RequestDescriptor::get(format!("/users/{username}"))
    }
}

impl GitHubClient {
    /// The user the client's token belongs to; 401 without a token
    pub async fn get_authenticated_user(&self) -> Result<Value> {
        self.execute_json(&request::authenticated()).await
    }

    pub async fn get_user(&self, username: &str) -> Result<Value> {
        self.execute_json(&request::get(username)).await
    }
}
