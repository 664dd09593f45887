//! Log output setup.
//!
//! `LOG_LEVEL` takes any `EnvFilter` directive string; unset, quiz serving and
//! startup log at debug and everything else at info. `LOG_FORMAT=json` emits
//! one JSON object per event, for log shippers.

use tracing_subscriber::EnvFilter;

/// `quiz`: per-request selection events. `daily_quiz`: startup and config.
const DEFAULT_FILTER: &str = "info,quiz=debug,daily_quiz=debug,tower_http=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json")) {
        fmt.json().init();
    } else {
        fmt.init();
    }
}
