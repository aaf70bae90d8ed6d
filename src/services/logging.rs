use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `capacity=debug`.
pub const LOG_ENV_VAR: &str = "CAPACITY_LOG";

/// Maps the number of `-v` flags to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs a stderr `fmt` subscriber. `CAPACITY_LOG` wins over the verbosity
/// flag when it is set. Calling this twice is a no-op.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
