//! Utility modules for common functionality

pub mod logging;
pub mod repo_spec;

// Re-export commonly used functions
pub use logging::init_logging;
pub use repo_spec::{RepoSpec, parse_github_url};
