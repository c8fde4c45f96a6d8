use dnsbl_domain::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout only carries operation results.
///
/// `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.json {
        builder.json().try_init().ok();
    } else {
        builder.try_init().ok();
    }
}
