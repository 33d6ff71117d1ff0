use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. CloudWatch stamps each line, so no timestamps.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();
}
