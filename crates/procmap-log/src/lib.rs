//! Tracing subscriber setup for the procmap binaries.
//!
//! Library crates only emit events; this crate installs the subscriber that
//! prints them. Console output is human-readable with an uptime clock, and
//! debug builds can additionally write JSON lines to `procmap.log`.

use std::fs::File;
use std::path::Path;

use procmap_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "procmap.log";

const DEFAULT_DIRECTIVES: &str = "info";

/// Filter directives from the config's `log_level`, or the default when it
/// is absent or blank.
pub fn filter_directives(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES)
        .to_string()
}

/// The active filter: `RUST_LOG` when set and valid, otherwise `directives`.
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// Create `log_dir` and a fresh log file inside it.
fn open_log_file(log_dir: &Path) -> Option<File> {
    std::fs::create_dir_all(log_dir).ok()?;
    File::create(log_dir.join(LOG_FILE_NAME)).ok()
}

/// Install the global subscriber.
///
/// `log_dir` is only used when `debug_build` is set. Returns `false` if a
/// subscriber was already installed, in which case nothing changes.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) -> bool {
    let filter = env_filter(&filter_directives(config));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer);

    if debug_build && let Some(log_file) = log_dir.and_then(open_log_file) {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();
        return subscriber.with(file_layer).try_init().is_ok();
    }

    subscriber.try_init().is_ok()
}
