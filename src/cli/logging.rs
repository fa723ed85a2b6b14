use std::env;
use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise warnings are shown, or debug events
/// when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(env::var_os("NO_COLOR").is_none())
        .without_time()
        .try_init();
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}
