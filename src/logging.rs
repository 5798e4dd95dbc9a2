use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "cred_lookup=info";
const LOG_FILTER_ENV: &str = "CRED_LOOKUP_LOG";

/// Filter from `CRED_LOOKUP_LOG`, then `RUST_LOG`, then the crate default.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the stderr subscriber. Call once, before launching the UI.
pub fn init_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(log_filter()),
        )
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
