//! Logging setup for the headless client.
use anyhow::Result;

/// Installs a stderr subscriber filtered by `RUST_LOG`, INFO and above by
/// default. Stdout is reserved for the report.
pub fn setup_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))
}
