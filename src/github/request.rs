//! Request descriptors
//!
//! A [`RequestDescriptor`] is the complete description of one API call:
//! method, already-interpolated path, query parameters, optional JSON body,
//! header overrides and the media type to request. Endpoint wrappers only
//! build descriptors; the client is the only place that turns them into
//! network calls.

use crate::constants::media;
use crate::github::error::{GitHubError, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Bool(b) => write!(f, "{b}"),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

/// Media type requested through the `Accept` header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MediaType {
    /// The default JSON representation
    #[default]
    Json,
    /// Star listings with `starred_at` timestamps
    StarTimestamps,
    /// Raw file contents
    Raw,
    Custom(String),
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Json => media::JSON,
            MediaType::StarTimestamps => media::STAR_TIMESTAMPS,
            MediaType::Raw => media::RAW,
            MediaType::Custom(value) => value,
        }
    }
}

/// How the client should treat a successful response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Raw,
}

/// Description of a single API call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: BTreeMap<String, QueryValue>,
    pub body: Option<Value>,
    pub headers: BTreeMap<String, String>,
    pub accept: Option<MediaType>,
    pub format: ResponseFormat,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: BTreeMap::new(),
            body: None,
            headers: BTreeMap::new(),
            accept: None,
            format: ResponseFormat::Json,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set a single query parameter, replacing any previous value
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set a query parameter only when a value is present
    pub fn param_opt<V: Into<QueryValue>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Merge the fields of a serializable parameter struct into the query.
    ///
    /// `None` fields are skipped. Arrays are joined with commas, the
    /// convention the API uses for multi-valued filters.
    pub fn query<T: Serialize>(mut self, params: &T) -> Result<Self> {
        let value = serde_json::to_value(params)?;
        let Value::Object(map) = value else {
            return Err(GitHubError::Decode {
                message: "query parameters must serialize to an object".to_string(),
            });
        };

        for (key, value) in map {
            if let Some(value) = to_query_value(value) {
                self.query.insert(key, value);
            }
        }
        Ok(self)
    }

    /// Attach a JSON body serialized from `body`
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Override a header for this request only
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn accept(mut self, media_type: MediaType) -> Self {
        self.accept = Some(media_type);
        self
    }

    pub fn raw(mut self) -> Self {
        self.format = ResponseFormat::Raw;
        self
    }

    /// Re-derive a typed parameter struct from the query parameters
    pub fn query_as<T: DeserializeOwned>(&self) -> Result<T> {
        let map: Map<String, Value> = self
            .query
            .iter()
            .map(|(k, v)| (k.clone(), query_to_json(v)))
            .collect();
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Re-derive a typed payload from the JSON body
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self.body.clone().unwrap_or(Value::Null);
        Ok(serde_json::from_value(body)?)
    }

    /// Extract the `{placeholder}` values of `template` from the path.
    ///
    /// Returns `None` when the path does not have the template's shape.
    pub fn path_params(&self, template: &str) -> Option<BTreeMap<String, String>> {
        let path = self.path.trim_matches('/');
        let template = template.trim_matches('/');

        let segments: Vec<&str> = path.split('/').collect();
        let pattern: Vec<&str> = template.split('/').collect();
        if segments.len() != pattern.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, expected) in segments.iter().zip(&pattern) {
            match expected
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                Some(name) => {
                    params.insert(name.to_string(), segment.to_string());
                }
                None if segment == expected => {}
                None => return None,
            }
        }
        Some(params)
    }
}

fn to_query_value(value: Value) -> Option<QueryValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(QueryValue::Bool(b)),
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => QueryValue::Int(i),
            None => QueryValue::Str(n.to_string()),
        }),
        Value::String(s) => Some(QueryValue::Str(s)),
        Value::Array(items) => Some(QueryValue::Str(
            items
                .into_iter()
                .filter_map(to_query_value)
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(","),
        )),
        Value::Object(_) => Some(QueryValue::Str(value.to_string())),
    }
}

fn query_to_json(value: &QueryValue) -> Value {
    match value {
        QueryValue::Bool(b) => Value::Bool(*b),
        QueryValue::Int(n) => Value::from(*n),
        QueryValue::Str(s) => Value::String(s.clone()),
    }
}
