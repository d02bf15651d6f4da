use tracing_subscriber::EnvFilter;

/// Sets up logging to stderr.
///
/// Verbosity maps to the level for this crate's target:
/// - 0 -> warn
/// - 1 (-v) -> info
/// - 2 (-vv) -> debug
/// - 3+ -> trace
///
/// `RUST_LOG` takes precedence when set.
pub(crate) fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}
