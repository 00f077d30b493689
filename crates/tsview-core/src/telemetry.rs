// File: crates/tsview-core/src/telemetry.rs
// Summary: Opt-in tracing subscriber setup for host binaries.

/// Initializes a default `tracing` subscriber.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Returns `false` when a
/// global subscriber is already installed.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_default_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

/// No-op without the `telemetry` feature; always returns `false`.
#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_default_tracing() -> bool {
    false
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    #[test]
    fn disabled_feature_installs_nothing() {
        assert!(!super::init_default_tracing());
    }
}
