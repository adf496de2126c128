//! Configuration layering tests: flags, YAML file and environment

use ghrest::config::{ClientConfig, ConfigFile};
use ghrest::github::{AuthScheme, GitHubClient, GitHubError};
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;

const VARS: [&str; 3] = ["GITHUB_TOKEN", "GITHUB_API_URL", "GHREST_AUTH_SCHEME"];

/// Run `f` with the given variables set and every other client variable
/// removed, restoring the original environment afterwards
fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let saved: Vec<(&str, Option<String>)> =
        VARS.iter().map(|k| (*k, std::env::var(k).ok())).collect();

    unsafe {
        for key in VARS {
            std::env::remove_var(key);
        }
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
    }

    f();

    unsafe {
        for (key, value) in saved {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[test]
#[serial]
fn test_env_supplies_token_and_base_url() {
    with_env(
        &[
            ("GITHUB_TOKEN", "env-token"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3/"),
            ("GHREST_AUTH_SCHEME", "token"),
        ],
        || {
            let config = ClientConfig::from_env().unwrap();
            assert_eq!(config.base_url, "https://ghe.example.com/api/v3");
            let auth = config.auth.expect("token from environment");
            assert_eq!(auth.token(), "env-token");
            assert_eq!(auth.scheme(), AuthScheme::Token);
        },
    );
}

#[test]
#[serial]
fn test_explicit_token_wins_over_env() {
    with_env(&[("GITHUB_TOKEN", "env-token")], || {
        let client = GitHubClient::new(Some("flag-token".to_string())).unwrap();
        assert_eq!(client.token(), Some("flag-token"));
    });
}

#[test]
#[serial]
fn test_empty_env_token_is_anonymous() {
    with_env(&[("GITHUB_TOKEN", "  ")], || {
        let client = GitHubClient::from_env().unwrap();
        assert!(!client.is_authenticated());
    });
}

#[test]
#[serial]
fn test_invalid_env_base_url_is_rejected() {
    with_env(&[("GITHUB_API_URL", "ftp://example.com")], || {
        let err = GitHubClient::from_env().unwrap_err();
        assert!(matches!(err, GitHubError::InvalidConfig(_)));
    });
}

#[test]
#[serial]
fn test_file_layers_between_flags_and_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ghrest.yaml");
    std::fs::write(
        &path,
        "token: file-token\nmax_retries: 5\nbackoff_base_ms: 250\nper_page: 50\n",
    )
    .unwrap();

    with_env(
        &[
            ("GITHUB_TOKEN", "env-token"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3"),
        ],
        || {
            let file = ConfigFile::load(&path).unwrap();
            let config = ClientConfig::builder()
                .max_retries(1)
                .with_file(&file)
                .with_env()
                .build()
                .unwrap();

            assert_eq!(config.retry.max_retries, 1);
            assert_eq!(config.retry.base_delay, Duration::from_millis(250));
            assert_eq!(config.per_page, 50);
            assert_eq!(config.auth.map(|a| a.token().to_string()).as_deref(), Some("file-token"));
            assert_eq!(config.base_url, "https://ghe.example.com/api/v3");
        },
    );
}

#[test]
fn test_missing_optional_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let file = ConfigFile::load_optional(dir.path().join("absent.yaml")).unwrap();
    assert_eq!(file, ConfigFile::default());
}

#[test]
fn test_unknown_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ghrest.yaml");
    std::fs::write(&path, "tokn: typo\n").unwrap();

    let err = ConfigFile::load(&path).unwrap_err();
    assert!(err.to_string().contains("ghrest.yaml"));
}

#[test]
fn test_saved_file_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ghrest.yaml");
    let file = ConfigFile {
        base_url: Some("https://ghe.example.com/api/v3".to_string()),
        auth_scheme: Some(AuthScheme::Token),
        max_pages: Some(10),
        ..ConfigFile::default()
    };

    file.save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("---\n"));
    assert!(!text.contains("token:"));
    assert_eq!(ConfigFile::load(&path).unwrap(), file);
}

#[test]
fn test_out_of_range_page_size_is_rejected() {
    let err = ClientConfig::builder().per_page(0).build().unwrap_err();
    assert!(matches!(err, GitHubError::InvalidConfig(_)));

    let err = ClientConfig::builder().per_page(101).build().unwrap_err();
    assert!(matches!(err, GitHubError::InvalidConfig(_)));
}
