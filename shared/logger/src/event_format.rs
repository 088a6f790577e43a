//! Line format for log output: `[timestamp] LEVEL [component: name]: message`.

use crate::log_level::LogLevel;
use chrono::Local;
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Formats events with a local timestamp and an optional component tag.
pub(crate) struct ComponentFormat {
    component: Option<String>,
}

impl ComponentFormat {
    pub(crate) fn new(component: Option<String>) -> Self {
        Self { component }
    }
}

impl<S, N> FormatEvent<S, N> for ComponentFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = LogLevel::from(*event.metadata().level());
        write!(
            writer,
            "[{}] {}",
            Local::now().format(TIMESTAMP_FORMAT),
            level.as_str()
        )?;

        if let Some(ref component) = self.component {
            write!(writer, " [component: {}]", component)?;
        }

        write!(writer, ": ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_writer::FileMakeWriter;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn capture(component: Option<&str>, emit: impl FnOnce()) -> String {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("format.log");
        let writer = FileMakeWriter::spawn(&log_path).unwrap();

        let subscriber = tracing_subscriber::fmt()
            .event_format(ComponentFormat::new(component.map(str::to_string)))
            .with_writer(writer)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, emit);

        thread::sleep(Duration::from_millis(100));
        fs::read_to_string(log_path).unwrap()
    }

    #[test]
    fn test_line_has_level_component_and_message() {
        let content = capture(Some("CallScreen"), || {
            tracing::warn!("Camera busy");
        });

        assert!(content.contains("WARN [component: CallScreen]: Camera busy"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_line_without_component() {
        let content = capture(None, || {
            tracing::error!("Connection failed");
        });

        assert!(content.contains("] ERROR: Connection failed"));
        assert!(!content.contains("component"));
    }

    #[test]
    fn test_timestamp_prefix() {
        let content = capture(None, || tracing::info!("Test"));
        let stamp = content
            .strip_prefix('[')
            .and_then(|rest| rest.split(']').next())
            .unwrap();

        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(stamp.len(), 23);
        assert!(stamp.contains('-'));
        assert!(stamp.contains(':'));
        assert!(stamp.contains('.'));
    }
}
