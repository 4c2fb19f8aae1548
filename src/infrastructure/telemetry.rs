//! Tracing setup for hosts that do not install their own subscriber.

/// Install a formatted subscriber honoring RUST_LOG, defaulting to
/// info. Safe to call more than once.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
