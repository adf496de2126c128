//! Offset pagination
//!
//! List endpoints are swept page by page with `page` and `per_page` query
//! parameters. A sweep stops at the first empty page or the first page
//! holding fewer items than requested, or when the configured page cap is
//! reached. Page sizes are clamped to `1..=100`, the range the API honours.
//! Each page request goes through the client's retry policy; a page that
//! still fails aborts the sweep.

use super::client::GitHubClient;
use super::error::{GitHubError, Result};
use super::request::{QueryValue, RequestDescriptor};
use super::response::ResponseBody;
use crate::config::validation::MAX_PER_PAGE;
use futures::stream::{self, Stream, TryStreamExt};
use serde_json::Value;
use tracing::{debug, warn};

/// Settings for a pagination sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Items requested per page, unless the request already sets `per_page`
    pub per_page: u32,
    /// Stop after this many pages; unbounded when `None`
    pub max_pages: Option<u32>,
    /// Field holding the items when pages are objects (e.g. `items` for
    /// search, `workflow_runs` for Actions runs)
    pub items_field: Option<String>,
}

impl PageOptions {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page,
            max_pages: None,
            items_field: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_items_field(mut self, field: impl Into<String>) -> Self {
        self.items_field = Some(field.into());
        self
    }
}

/// Whether a list call sweeps every page or fetches just one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Listing {
    #[default]
    All,
    Page { page: u32, per_page: u32 },
}

struct Sweep {
    request: RequestDescriptor,
    per_page: u32,
    page: u32,
    done: bool,
}

impl GitHubClient {
    /// Page options derived from the client configuration
    pub fn page_options(&self) -> PageOptions {
        PageOptions::new(self.config.per_page).with_max_pages(self.config.max_pages)
    }

    /// Lazily sweep every page of `request`, yielding items in order.
    ///
    /// Pages are only fetched as the stream is polled, so dropping the
    /// stream early saves the remaining requests.
    pub fn paginate_stream(
        &self,
        request: RequestDescriptor,
        options: PageOptions,
    ) -> impl Stream<Item = Result<Value>> + '_ {
        let requested = match request.query.get("per_page") {
            Some(QueryValue::Int(n)) if *n > 0 => u32::try_from(*n).unwrap_or(MAX_PER_PAGE),
            _ => options.per_page,
        };
        let per_page = requested.clamp(1, MAX_PER_PAGE);
        if per_page != requested {
            debug!(path = %request.path, requested, per_page, "clamped page size");
        }

        let sweep = Sweep {
            request,
            per_page,
            page: 1,
            done: false,
        };

        stream::try_unfold(sweep, move |mut sweep| {
            let max_pages = options.max_pages;
            let items_field = options.items_field.clone();
            async move {
                if sweep.done {
                    return Ok::<_, GitHubError>(None);
                }
                if max_pages.is_some_and(|max| sweep.page > max) {
                    warn!(
                        path = %sweep.request.path,
                        max_pages = max_pages.unwrap_or_default(),
                        "stopping pagination at the page cap; results may be incomplete"
                    );
                    return Ok(None);
                }

                let items = self
                    .fetch_page(&sweep.request, sweep.page, sweep.per_page, items_field.as_deref())
                    .await?;
                debug!(
                    path = %sweep.request.path,
                    page = sweep.page,
                    items = items.len(),
                    "fetched page"
                );

                if items.is_empty() || items.len() < sweep.per_page as usize {
                    sweep.done = true;
                } else {
                    sweep.page += 1;
                }
                Ok(Some((items, sweep)))
            }
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok::<Value, GitHubError>)))
        .try_flatten()
    }

    /// Sweep every page of `request` and collect the items
    pub async fn paginate(&self, request: RequestDescriptor, options: PageOptions) -> Result<Vec<Value>> {
        self.paginate_stream(request, options).try_collect().await
    }

    /// Fetch a single page of `request`
    pub async fn fetch_page(
        &self,
        request: &RequestDescriptor,
        page: u32,
        per_page: u32,
        items_field: Option<&str>,
    ) -> Result<Vec<Value>> {
        let request = request
            .clone()
            .param("per_page", per_page)
            .param("page", page);
        let response = self.execute(&request).await?;
        extract_items(response.body, items_field)
    }

    /// Run a list request as a full sweep or a single page
    pub(crate) async fn list(
        &self,
        request: RequestDescriptor,
        listing: Listing,
        options: PageOptions,
    ) -> Result<Vec<Value>> {
        match listing {
            Listing::All => self.paginate(request, options).await,
            Listing::Page { page, per_page } => {
                self.fetch_page(&request, page, per_page, options.items_field.as_deref())
                    .await
            }
        }
    }
}

fn extract_items(body: ResponseBody, items_field: Option<&str>) -> Result<Vec<Value>> {
    match (body, items_field) {
        (ResponseBody::Empty, _) => Ok(Vec::new()),
        (ResponseBody::Json(Value::Array(items)), _) => Ok(items),
        (ResponseBody::Json(Value::Object(mut page)), Some(field)) => match page.remove(field) {
            Some(Value::Array(items)) => Ok(items),
            Some(_) | None => Err(GitHubError::Decode {
                message: format!("page has no '{field}' array"),
            }),
        },
        (ResponseBody::Json(other), _) => Err(GitHubError::Decode {
            message: format!("expected a JSON array page, got {}", json_kind(&other)),
        }),
        (ResponseBody::Raw(_), _) => Err(GitHubError::Decode {
            message: "expected a JSON array page, got a raw body".to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_page() {
        let items = extract_items(ResponseBody::Json(json!([1, 2, 3])), None).unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_object_page_with_items_field() {
        let body = ResponseBody::Json(json!({"total_count": 2, "items": [{"id": 1}, {"id": 2}]}));
        let items = extract_items(body, Some("items")).unwrap();
        assert_eq!(items, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn test_object_page_without_field_is_decode_error() {
        let body = ResponseBody::Json(json!({"total_count": 0}));
        assert!(matches!(
            extract_items(body, Some("items")),
            Err(GitHubError::Decode { .. })
        ));

        let body = ResponseBody::Json(json!({"items": []}));
        assert!(matches!(extract_items(body, None), Err(GitHubError::Decode { .. })));
    }

    #[test]
    fn test_empty_body_is_empty_page() {
        assert!(extract_items(ResponseBody::Empty, None).unwrap().is_empty());
    }

    #[test]
    fn test_page_options_builders() {
        let options = PageOptions::new(30)
            .with_max_pages(Some(2))
            .with_items_field("workflow_runs");
        assert_eq!(options.per_page, 30);
        assert_eq!(options.max_pages, Some(2));
        assert_eq!(options.items_field.as_deref(), Some("workflow_runs"));
        assert_eq!(Listing::default(), Listing::All);
    }
}
