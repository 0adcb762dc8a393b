//! Tracing initialization for binaries embedding the engine

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG`; falls back to debug-level engine logs. Call once at
/// process start.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armory_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
