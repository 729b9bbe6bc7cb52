//! Tracing setup for the host binary
//!
//! The binary's product is the dashboard JSON on stdout, so every log line
//! is written to stderr. `APP_ENV=production` switches the stderr stream to
//! one JSON object per event for log shippers; otherwise it is ANSI text.
//! `RUST_LOG` overrides the default `info` filter.

use crate::config::get_environment;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Install the global subscriber; call once, before the feed is loaded
pub fn init_logging() {
    let env = get_environment();
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if is_production(&env) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Accepts both spellings used in deployment `.env` files
pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}
