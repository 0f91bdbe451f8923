//! Logging setup
//!
//! The crate itself only emits `tracing` events. Applications call [`init`]
//! once at startup to print them.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global `tracing` subscriber
///
/// `RUST_LOG` wins when set. Otherwise debug builds log `acton_admin` at
/// `trace` with pretty output and release builds log `info` as JSON.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use acton_admin::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("admin ready");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    #[cfg(debug_assertions)]
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .try_init()?;

    #[cfg(not(debug_assertions))]
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()?;

    Ok(())
}

fn default_filter() -> EnvFilter {
    if cfg!(debug_assertions) {
        EnvFilter::new("debug,acton_admin=trace")
    } else {
        EnvFilter::new("info")
    }
}
