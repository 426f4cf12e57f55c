use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber.
///
/// Logs always go to stderr. When `log_dir` is given a plain-text copy is
/// also written to `<log_dir>/<component>.log`, and the returned guard must be
/// kept alive until the run ends so buffered lines are flushed.
pub fn init_logging(component: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    let registry = tracing_subscriber::registry().with(filter).with(stderr_layer);

    match log_dir {
        Some(dir) => {
            let _ = std::fs::create_dir_all(dir);
            // A build run is short-lived, so a single file per component is enough
            let file_appender = tracing_appender::rolling::never(dir, format!("{component}.log"));
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // File layer: no ANSI colors
            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true);
            registry.with(file_layer).init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}
