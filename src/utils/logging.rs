//! Structured logging setup

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "ghrest=warn";

/// Filter used with `--verbose`
pub const VERBOSE_FILTER: &str = "ghrest=debug";

/// Install the global tracing subscriber, writing to stderr so JSON output on
/// stdout stays clean.
///
/// `RUST_LOG` wins over both defaults. Calling this twice is harmless; the
/// second call leaves the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
