// src/log.rs
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map `-v` count to a default filter. `RUST_LOG` wins when set.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "price_scrape=info,warn",
        _ => "price_scrape=debug,info",
    }
}

/// Install the global subscriber: compact lines on stderr so stdout stays the report.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
