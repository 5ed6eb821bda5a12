//! Console logging.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `directive` when it is set. Records from the `log`
/// macros the library crates use are forwarded into the same subscriber.
pub fn init(directive: &str) -> anyhow::Result<()> {
    tracing_log::LogTracer::init().context("a logger is already installed")?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log_level `{directive}`"))?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("a tracing subscriber is already installed")?;
    Ok(())
}
