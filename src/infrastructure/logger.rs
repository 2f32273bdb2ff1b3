use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `filter` uses `RUST_LOG` syntax.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
