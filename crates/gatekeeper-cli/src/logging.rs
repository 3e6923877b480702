use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "GATEKEEPER_LOG";

/// Install a stderr subscriber. Stdout is reserved for the verdict line.
///
/// An unparseable filter falls back to `warn`. Installing twice is a no-op.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// [`init`] with the filter from [`LOG_ENV`], `warn` when unset.
pub fn init_from_env() {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".to_string());
    init(&filter);
}
