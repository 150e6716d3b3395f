use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so they never mix with the report on stdout.
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn init(verbose: bool) {
    let default_directive =
        if verbose { "weather_cli=debug,weather_core=debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
