use tracing_subscriber::EnvFilter;

use crate::error::{BookError, BookResult};

/// Install the global subscriber. Logs go to stderr; stdout is kept for
/// command output. `RUST_LOG` takes precedence over `default_filter`.
pub fn init(default_filter: &str) -> BookResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| BookError::Other(format!("invalid log filter {default_filter:?}: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| BookError::Other(format!("logging already initialized: {e}")))
}
