//! Responses returned by the transport layer

use crate::github::error::{GitHubError, Result};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Raw(Vec<u8>),
    /// 204 No Content or a zero-length body
    Empty,
}

/// A successful (2xx) response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn is_empty(&self) -> bool {
        matches!(self.body, ResponseBody::Empty)
    }

    /// The decoded JSON body, or `None` for an empty response
    pub fn into_json(self) -> Option<Value> {
        match self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Raw(bytes) => serde_json::from_slice(&bytes).ok(),
            ResponseBody::Empty => None,
        }
    }

    /// Decode the body into `T`, failing on an empty or mismatched body
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        match self.body {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Raw(bytes) => Ok(serde_json::from_slice(&bytes)?),
            ResponseBody::Empty => Err(GitHubError::Decode {
                message: format!("expected a JSON body, got an empty {} response", self.status),
            }),
        }
    }

    /// Raw body bytes; JSON bodies are re-serialized
    pub fn into_bytes(self) -> Vec<u8> {
        match self.body {
            ResponseBody::Raw(bytes) => bytes,
            ResponseBody::Json(value) => value.to_string().into_bytes(),
            ResponseBody::Empty => Vec::new(),
        }
    }
}
