//! Line format of log events

use colored::{Color, Colorize as _};
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Formats every event as `[LEVEL] message key=value...` on a single line
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFormatter;

const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::TRACE => "[TRACE]",
        Level::DEBUG => "[DEBUG]",
        Level::INFO => "[INFO]",
        Level::WARN => "[WARNING]",
        Level::ERROR => "[ERROR]",
    }
}

const fn level_color(level: Level) -> Color {
    match level {
        Level::TRACE | Level::DEBUG => Color::Magenta,
        Level::INFO => Color::Blue,
        Level::WARN => Color::Yellow,
        Level::ERROR => Color::Red,
    }
}

impl<S, N> FormatEvent<S, N> for LogFormatter
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
        let level = *event.metadata().level();
        let tag = level_tag(level);

        if writer.has_ansi_escapes() {
            write!(writer, "{} ", tag.color(level_color(level)).bold())?;
        } else {
            write!(writer, "{tag} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogBuffer, LogConfig};
    use tracing::{error, warn};

    #[test]
    fn test_level_tags() {
        let buffer = LogBuffer::new();
        let subscriber = LogConfig::from_verbose(false).subscriber(buffer.clone(), false);

        tracing::subscriber::with_default(subscriber, || {
            warn!("update available");
            error!("it broke");
        });

        let lines = buffer.lines();
        assert_eq!(lines[0], "[WARNING] update available");
        assert_eq!(lines[1], "[ERROR] it broke");
    }

    #[test]
    fn test_tags_are_distinct() {
        let levels = [Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR];
        let tags: std::collections::HashSet<_> = levels.into_iter().map(level_tag).collect();
        assert_eq!(tags.len(), levels.len());
    }
}
