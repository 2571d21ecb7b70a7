//! Logging setup for synchronization runs.
//!
//! Structured logging via the `tracing` crate, rendered as one
//! `timestamp - LEVEL - message` line per event and appended to the tool's
//! log file. The reconciler reports copies and deletions at info level and
//! skipped-identical files at debug level, so the active filter doubles as
//! the verbosity switch.

use crate::error::SyncError;
use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Name of the log file, resolved against the working directory.
pub const LOG_FILE: &str = "docsync.log";

/// Environment variable overriding the configured log level filter.
pub const LOG_ENV_VAR: &str = "DOCSYNC_LOG";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off.
    pub level: String,

    /// Log file path.
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from(LOG_FILE),
        }
    }
}

/// Event formatter producing `timestamp - LEVEL - message` lines.
struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        write!(writer, "{} - {} - ", timestamp, event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initialize the logging system.
///
/// The level filter comes from the `DOCSYNC_LOG` environment variable when
/// set, otherwise from the configuration. Output is appended to the
/// configured log file so consecutive runs accumulate in one place.
pub fn init_logging(config: &LoggingConfig) -> Result<(), SyncError> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    if let Some(parent) = config.file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SyncError::Config(format!("Failed to create log directory: {}", e))
            })?;
        }
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|e| {
            SyncError::Config(format!("Failed to open log file {:?}: {}", config.file, e))
        })?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .event_format(LineFormat)
                .with_ansi(false)
                .with_writer(log_file),
        )
        .init();

    Ok(())
}
