//! Central constants for the ghrest client

/// Default values for talking to the REST API
pub mod api {
    /// Public API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// API version pinned through the `X-GitHub-Api-Version` header
    pub const DEFAULT_API_VERSION: &str = "2022-11-28";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("ghrest/", env!("CARGO_PKG_VERSION"));

    /// Header carrying the API version (lowercase, as `HeaderName` requires)
    pub const API_VERSION_HEADER: &str = "x-github-api-version";
}

/// Media types accepted by the API
pub mod media {
    /// Default JSON payloads
    pub const JSON: &str = "application/vnd.github+json";

    /// Star listings augmented with `starred_at` timestamps
    pub const STAR_TIMESTAMPS: &str = "application/vnd.github.star+json";

    /// Raw file contents
    pub const RAW: &str = "application/vnd.github.raw+json";
}

/// Rate limit signalling headers
pub mod rate_limit {
    pub const RETRY_AFTER: &str = "retry-after";
    pub const RESET: &str = "x-ratelimit-reset";
    pub const REMAINING: &str = "x-ratelimit-remaining";
}

/// Retry and pagination defaults
pub mod defaults {
    /// Retries after the initial attempt
    pub const MAX_RETRIES: u32 = 3;

    /// Base delay for exponential backoff, in milliseconds
    pub const BACKOFF_BASE_MS: u64 = 1000;

    /// Request timeout, in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    /// Page size requested by pagination sweeps (API maximum)
    pub const PER_PAGE: u32 = 100;

    /// Safety cap on pages fetched by a single sweep
    pub const MAX_PAGES: u32 = 500;

    /// Pages fetched by a star history sweep unless told otherwise
    pub const STAR_HISTORY_MAX_PAGES: u32 = 100;
}

/// Environment variables read by the configuration layer
pub mod env {
    pub const TOKEN: &str = "GITHUB_TOKEN";
    pub const API_URL: &str = "GITHUB_API_URL";
    pub const AUTH_SCHEME: &str = "GHREST_AUTH_SCHEME";
}

/// Default values for configuration files
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "ghrest.yaml";
}
