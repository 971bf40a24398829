use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::env::{log_format, LogFormat};

/// Install the global subscriber. `RUST_LOG` filters (default `info`);
/// `LAST_TRICK_LOG_FORMAT=json` switches to JSON lines. Logs go to stderr so
/// they never interleave with the rendered table.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    match log_format() {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(base.with_ansi(false).json())
            .init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(env_filter)
            .with(base.compact())
            .init(),
    }
}
