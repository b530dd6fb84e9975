use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    match (verbose, level) {
        (true, _) => EnvFilter::new("godbolt_mcp=debug,info"),
        (false, Some(level)) => EnvFilter::new(format!("godbolt_mcp={},warn", level)),
        (false, None) => EnvFilter::new("godbolt_mcp=info,warn"),
    }
}

/// Install the global subscriber. stdout carries the MCP protocol, so every
/// layer writes to stderr.
pub fn init_logger(verbose: bool, json: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose, level));

    let base = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(base.with_target(true).json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(base.with_target(false).compact())
            .init();
    }
}
