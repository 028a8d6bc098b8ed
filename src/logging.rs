use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "BIZSCORE_LOG";

/// Install the stderr tracing subscriber.
///
/// `BIZSCORE_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "bizscore=debug"
    } else {
        "warn"
    }
}
