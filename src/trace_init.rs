//! Optional JSONL tracing for the engine and the service facade.
//!
//! Compiled in only with the `trace` feature. Without it `init_tracing`
//! reports `None` so callers can tell the user their `--log-dir` is ignored.

use std::io;
use std::path::{Path, PathBuf};

/// File created inside the log directory.
pub const TRACE_FILE_NAME: &str = "autocomplete-trace.jsonl";

/// Environment variable holding an `EnvFilter` directive that overrides
/// [`DEFAULT_TRACE_FILTER`].
pub const TRACE_FILTER_ENV: &str = "AUTOCOMPLETE_TRACE";

pub const DEFAULT_TRACE_FILTER: &str = "autocomplete=debug,ac_core=debug";

pub fn trace_file(log_dir: &Path) -> PathBuf {
    log_dir.join(TRACE_FILE_NAME)
}

/// Install the trace subscriber writing to `log_dir`, creating the directory.
///
/// Returns the trace file path, or `None` when built without `trace`.
/// Only the first successful call installs a subscriber.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> io::Result<Option<PathBuf>> {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    std::fs::create_dir_all(log_dir)?;
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        std::mem::forget(guard); // flushed for the life of the process

        let filter = EnvFilter::try_from_env(TRACE_FILTER_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_FILTER));
        // another global subscriber wins; our spans then go there
        let _ = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
    });
    Ok(Some(trace_file(log_dir)))
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> io::Result<Option<PathBuf>> {
    Ok(None)
}
