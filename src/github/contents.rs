//! Repository contents: reading and writing files

use super::client::GitHubClient;
use super::error::{GitHubError, Result};
use super::request::{MediaType, RequestDescriptor};
use super::types::FileUpdate;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct FileCommit<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// Request builders for content endpoints
pub mod request {
    use super::*;

    fn contents_path(owner: &str, repo: &str, path: &str) -> String {
        format!("/repos/{owner}/{repo}/contents/{}", path.trim_start_matches('/'))
    }

    pub fn get(owner: &str, repo: &str, path: &str, git_ref: Option<&str>) -> RequestDescriptor {
        RequestDescriptor::get(contents_path(owner, repo, path)).param_opt("ref", git_ref)
    }

    pub fn get_raw(owner: &str, repo: &str, path: &str, git_ref: Option<&str>) -> RequestDescriptor {
        get(owner, repo, path, git_ref).accept(MediaType::Raw).raw()
    }

    /// File write with the content base64-encoded
    pub fn put_file(
        owner: &str,
        repo: &str,
        path: &str,
        file: &FileUpdate,
    ) -> Result<RequestDescriptor> {
        let commit = FileCommit {
            message: &file.message,
            content: STANDARD.encode(&file.content),
            branch: file.branch.as_deref(),
            sha: file.sha.as_deref(),
        };
        RequestDescriptor::put(contents_path(owner, repo, path)).json(&commit)
    }
}

/// Decode the base64 `content` field of a file object returned by
/// [`GitHubClient::get_content`]. The API wraps the encoding at 60 columns.
pub fn decode_content(file: &Value) -> Result<Vec<u8>> {
    let encoded = file
        .get("content")
        .and_then(Value::as_str)
        .ok_or_else(|| GitHubError::Decode {
            message: "content object has no 'content' string".to_string(),
        })?;
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(compact).map_err(|e| GitHubError::Decode {
        message: format!("invalid base64 content: {e}"),
    })
}

impl GitHubClient {
    /// Get a file or directory listing
    ///
    /// # Arguments
    /// * `path` - Path inside the repository
    /// * `git_ref` - Branch, tag or commit; the default branch when `None`
    pub async fn get_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<Value> {
        self.execute_json(&request::get(owner, repo, path, git_ref))
            .await
    }

    /// Raw bytes of a file
    pub async fn get_file_raw(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<Vec<u8>> {
        let response = self
            .execute(&request::get_raw(owner, repo, path, git_ref))
            .await?;
        Ok(response.into_bytes())
    }

    /// Create a file, or replace it when `file.sha` names the current blob
    pub async fn create_or_update_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        file: &FileUpdate,
    ) -> Result<Value> {
        self.execute_json(&request::put_file(owner, repo, path, file)?)
            .await
    }
}
