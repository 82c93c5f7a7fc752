//! Run pipeline: parse, version check, logging, update advisory, dispatch
//!
//! One pipeline run handles exactly one command line. Each stage is a
//! precondition of the next, and the only place failures are classified is
//! [`report_failure`], evaluated once after the handler returns.

use crate::cli::args::{ParsedArguments, build_parser};
use crate::cli::registry::Registry;
use crate::error::{CommandError, ExitStatus};
use crate::logging::LogConfig;
use crate::update::UpdateAdvisory;
use crate::utils::HINT;
use anyhow::Result;
use std::ffi::OsString;
use std::io::Write;
use tracing::{debug, error, info};

/// How one invocation ended
#[derive(Debug)]
pub enum RunOutcome {
    /// `--version` was given; nothing else ran
    VersionPrinted,
    /// A handler ran and returned this result
    Dispatched(Result<(), CommandError>),
    /// No subcommand token was given
    NoSubcommand,
    /// The token matched no registered subcommand
    UnknownSubcommand(String),
}

impl RunOutcome {
    /// Exit status the process should terminate with
    #[must_use]
    pub const fn exit_status(&self) -> ExitStatus {
        match *self {
            Self::VersionPrinted | Self::Dispatched(Ok(())) => ExitStatus::Success,
            Self::Dispatched(Err(_)) | Self::NoSubcommand | Self::UnknownSubcommand(_) => {
                ExitStatus::Failure
            }
        }
    }
}

/// Version line printed by `--version` and logged on every run
#[must_use]
pub fn version_line() -> String {
    format!(
        "{} {} (+ {} {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        crate::api::NAME,
        crate::api::VERSION
    )
}

/// Wires the registry and the update advisory into one run
pub struct Pipeline<'a> {
    registry: &'a Registry,
    advisory: &'a dyn UpdateAdvisory,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub const fn new(registry: &'a Registry, advisory: &'a dyn UpdateAdvisory) -> Self {
        return Self { registry, advisory };
    }

    /// Run one command line to completion
    ///
    /// `configure_logging` receives the logging configuration once, after the
    /// version check and before anything is logged. Help for a missing or
    /// unknown subcommand goes to `stderr`; the version line goes to `stdout`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command line is malformed (a [`clap::Error`], including the
    ///   `--help` display request)
    /// - Writing the version line or the help text fails
    pub fn run<I, T, L>(
        &self,
        argv: I,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
        configure_logging: L,
    ) -> Result<RunOutcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        L: FnOnce(&LogConfig),
    {
        let mut parser = build_parser(self.registry);
        let matches = parser.try_get_matches_from_mut(argv)?;
        let parsed = ParsedArguments::from_matches(&matches)?;

        if parsed.version {
            writeln!(stdout, "{}", version_line())?;
            return Ok(RunOutcome::VersionPrinted);
        }

        configure_logging(&LogConfig::from_verbose(parsed.verbose));
        debug!("args: {parsed:?}");
        info!("{}", version_line());

        let is_current = self.advisory.is_current();

        let outcome = self.dispatch(&parsed);
        match outcome {
            RunOutcome::NoSubcommand | RunOutcome::UnknownSubcommand(_) => {
                write!(stderr, "{}", parser.render_long_help())?;
            }
            RunOutcome::Dispatched(Err(ref err)) => report_failure(err, is_current),
            RunOutcome::VersionPrinted | RunOutcome::Dispatched(Ok(())) => {}
        }

        Ok(outcome)
    }

    /// Resolve the subcommand token and invoke its handler once
    #[must_use]
    pub fn dispatch(&self, parsed: &ParsedArguments) -> RunOutcome {
        let Some(token) = parsed.subcommand.as_deref() else {
            return RunOutcome::NoSubcommand;
        };
        if parsed.is_external() {
            debug!("unknown subcommand: {token}");
            return RunOutcome::UnknownSubcommand(token.to_owned());
        }
        let Some(entry) = self.registry.resolve(token) else {
            debug!("unknown subcommand: {token}");
            return RunOutcome::UnknownSubcommand(token.to_owned());
        };

        debug!("dispatching to {}", entry.name);
        RunOutcome::Dispatched((entry.handler)(parsed))
    }
}

/// Log a handler failure the way users see it
///
/// The full error chain is only visible at debug level; the error-level line
/// is a single line. The upgrade hint is added when the advisory reported a
/// newer release.
pub fn report_failure(err: &CommandError, is_current: bool) {
    match *err {
        CommandError::NotSupported { ref operation } => {
            debug!("{err:?}");
            error!("{}", CommandError::NOT_SUPPORTED_MARKER);
            info!(
                "The operation you specified is not supported yet ({operation}). Pull requests are welcome."
            );
            info!("see: {}", env!("CARGO_PKG_REPOSITORY"));
        }
        CommandError::Unhandled(ref cause) => {
            debug!("{cause:?}");
            error!("{cause:#}");
        }
    }

    if !is_current {
        info!(
            "{HINT}try updating the version of {name}: $ cargo install --force {name}",
            name = env!("CARGO_PKG_NAME")
        );
    }
}
