//! Common test support utilities and fixtures
//!
//! Every client built here points at a local mock server, uses a fixed token
//! and a 1ms backoff base so retry tests finish quickly.

#![allow(dead_code)]

use ghrest::config::{ClientConfig, ClientConfigBuilder};
use ghrest::github::GitHubClient;
use mockito::ServerGuard;
use serde_json::{Value, json};
use std::time::Duration;

pub const TEST_TOKEN: &str = "test-token";

/// Builder preconfigured for the mock server, ready for extra settings
pub fn config_for(server: &ServerGuard) -> ClientConfigBuilder {
    ClientConfig::builder()
        .base_url(server.url())
        .token(TEST_TOKEN)
        .max_retries(3)
        .backoff_base(Duration::from_millis(1))
}

/// Client with default test settings
pub fn client_for(server: &ServerGuard) -> GitHubClient {
    GitHubClient::with_config(config_for(server).build().expect("valid test config"))
        .expect("client should build")
}

/// Client with custom settings layered onto the test defaults
pub fn client_with<F>(server: &ServerGuard, configure: F) -> GitHubClient
where
    F: FnOnce(ClientConfigBuilder) -> ClientConfigBuilder,
{
    let config = configure(config_for(server))
        .build()
        .expect("valid test config");
    GitHubClient::with_config(config).expect("client should build")
}

/// A JSON array of `count` items shaped like user objects, ids starting at `first_id`
pub fn users_page(first_id: u64, count: u64) -> String {
    let items: Vec<Value> = (first_id..first_id + count)
        .map(|id| json!({"id": id, "login": format!("user{id}")}))
        .collect();
    Value::Array(items).to_string()
}
