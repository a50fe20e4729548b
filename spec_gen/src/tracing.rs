use tracing_subscriber::EnvFilter;

/// Console logging for the generator binary. Progress is reported at
/// `info` by default; `RUST_LOG` overrides.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
