//! Global subscriber installation.

use crate::error::{LoggingError, Result};
use crate::event_format::ComponentFormat;
use crate::log_level::LogLevel;
use crate::log_writer::FileMakeWriter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where and how much to log.
///
/// # Examples
///
/// ```no_run
/// use logging::{LogLevel, LogSettings};
///
/// let settings = LogSettings::new(LogLevel::Info)
///     .with_file("app.log".into())
///     .with_component("Frontend");
/// logging::init(settings).unwrap();
/// tracing::info!("Application started");
/// ```
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: LogLevel,
    pub log_path: Option<PathBuf>,
    pub component: Option<String>,
    pub console_output: bool,
}

impl LogSettings {
    /// Console-less, file-less settings at `level`.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            log_path: None,
            component: None,
            console_output: false,
        }
    }

    /// Writes to `log_path` (created if it doesn't exist).
    pub fn with_file(mut self, log_path: PathBuf) -> Self {
        self.log_path = Some(log_path);
        self
    }

    /// Tags every line with a component or layer name.
    pub fn with_component(mut self, component: &str) -> Self {
        self.component = Some(component.to_string());
        self
    }

    /// Mirrors output to stdout.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console_output = enabled;
        self
    }

    /// Builds the level filter; `RUST_LOG` wins over the configured level.
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_directive()))
    }
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`LoggingError::Io`] if the log file cannot be opened and
/// [`LoggingError::Subscriber`] if a global subscriber is already set.
pub fn init(settings: LogSettings) -> Result<()> {
    let file_layer = match settings.log_path {
        Some(ref path) => Some(
            fmt::layer()
                .event_format(ComponentFormat::new(settings.component.clone()))
                .with_writer(FileMakeWriter::spawn(path)?),
        ),
        None => None,
    };

    let console_layer = settings.console_output.then(|| {
        fmt::layer()
            .event_format(ComponentFormat::new(settings.component.clone()))
            .with_writer(std::io::stdout)
    });

    tracing_subscriber::registry()
        .with(settings.filter())
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))
}
