//! Logging Infrastructure
//!
//! Console output (plain or JSON) plus optional daily-rolling files.
//! `RUST_LOG` overrides the configured level when set.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::BoxError;

/// Filter directives used when `RUST_LOG` is absent.
pub fn default_directives(level: &str) -> String {
    format!("till_server={level},tower_http=info,sqlx=warn")
}

/// Initialize the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process.
pub fn init_logger(
    level: &str,
    json: bool,
    log_dir: Option<&str>,
) -> Result<Option<WorkerGuard>, BoxError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let (file_writer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, "till-server");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let console_json = json.then(|| fmt::layer().json().with_current_span(false));
    let console_plain = (!json).then(|| fmt::layer().with_target(false));
    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_json)
        .with(console_plain)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
