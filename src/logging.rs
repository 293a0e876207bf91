//! Tracing setup: a log file under the platform data directory plus stderr.
//!
//! `PARTY_SITE_LOG` takes an `EnvFilter` directive and overrides the default
//! `info` level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const FILTER_ENV: &str = "PARTY_SITE_LOG";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process. `None` means the log directory was unusable and
/// only stderr is written.
pub fn init(site_id: &str) -> Option<WorkerGuard> {
    let log_dir = dirs::data_local_dir().map(|d| d.join(site_id));

    let Some(log_dir) = log_dir.filter(|d| std::fs::create_dir_all(d).is_ok()) else {
        init_stderr_only();
        return None;
    };

    let file_appender = tracing_appender::rolling::never(&log_dir, format!("{site_id}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(filter())
        .init();

    tracing::debug!(log_dir = ?log_dir, "logging initialized");
    Some(guard)
}

fn init_stderr_only() {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter())
        .init();

    tracing::debug!("logging initialized (stderr only)");
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}
