//! One-time logging configuration
//!
//! The run pipeline turns the `--verbose` flag into a [`LogConfig`] and hands
//! it to an installer exactly once. Every later log call, including those made
//! inside subcommand handlers, reads that configuration.

pub mod buffer;
pub mod format;

pub use buffer::LogBuffer;
pub use format::LogFormatter;

use std::io::{self, IsTerminal as _};
use tracing::subscriber::SetGlobalDefaultError;
use tracing::{Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Directives keeping third-party HTTP crates quiet in verbose mode
const QUIET_DEPENDENCIES: &str = "hyper=info,hyper_util=info,reqwest=info";

/// Process-wide logging configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    level: Level,
}

impl LogConfig {
    /// DEBUG when verbose, INFO otherwise
    #[must_use]
    #[inline]
    pub const fn from_verbose(verbose: bool) -> Self {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        return Self { level };
    }

    /// Severity threshold of this configuration
    #[must_use]
    #[inline]
    pub const fn level(&self) -> Level {
        self.level
    }

    fn filter(&self) -> EnvFilter {
        let level = match self.level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        EnvFilter::new(format!("{level},{QUIET_DEPENDENCIES}"))
    }

    /// Build a subscriber for this configuration writing to `writer`
    #[must_use]
    pub fn subscriber<W>(&self, writer: W, ansi: bool) -> impl Subscriber + Send + Sync + 'static
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(writer)
            .with_ansi(ansi)
            .event_format(LogFormatter)
            .finish()
    }

    /// Install this configuration as the global subscriber on standard output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A global subscriber has already been installed in this process
    #[inline]
    pub fn install(&self) -> Result<(), SetGlobalDefaultError> {
        let ansi = io::stdout().is_terminal();
        tracing::subscriber::set_global_default(self.subscriber(io::stdout, ansi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info};

    #[test]
    fn test_level_follows_verbose_flag() {
        assert_eq!(LogConfig::from_verbose(false).level(), Level::INFO);
        assert_eq!(LogConfig::from_verbose(true).level(), Level::DEBUG);
    }

    #[test]
    fn test_info_config_hides_debug_events() {
        let buffer = LogBuffer::new();
        let subscriber = LogConfig::from_verbose(false).subscriber(buffer.clone(), false);

        tracing::subscriber::with_default(subscriber, || {
            debug!("hidden detail");
            info!("visible note");
        });

        let output = buffer.contents();
        assert!(!output.contains("hidden detail"));
        assert!(output.contains("[INFO] visible note"));
    }

    #[test]
    fn test_debug_config_shows_debug_events() {
        let buffer = LogBuffer::new();
        let subscriber = LogConfig::from_verbose(true).subscriber(buffer.clone(), false);

        tracing::subscriber::with_default(subscriber, || {
            debug!("full trace");
        });

        assert!(buffer.contents().contains("[DEBUG] full trace"));
    }
}
