//! Logging setup
//!
//! Diagnostics go to stderr so they never mix with prompts.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set
#[must_use]
pub fn default_directive(level: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        level.to_string()
    }
}

/// Initialize logging
///
/// `RUST_LOG` wins over `level`; `verbose` forces `debug`.
///
/// # Example
///
/// ```rust,no_run
/// use stubforge_cli_lib::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init("warn", false)?;
/// tracing::warn!("using custom stub");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter or a subscriber is already installed.
pub fn init(level: &str, verbose: bool) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive(level, verbose))
            .with_context(|| format!("Invalid log level '{level}'"))?,
    };

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to install log subscriber")?;
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to install log subscriber")?;
    }

    Ok(())
}
