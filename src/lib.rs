//! `oj` - Tools for online judge services
//!
//! This library provides the command dispatcher of the `oj` tool: argument
//! parsing, subcommand alias resolution, one-time logging setup, a best-effort
//! update advisory and the mapping of handler failures to exit codes.

pub mod api;
pub mod cli;
pub mod error;
pub mod logging;
pub mod subcommand;
pub mod system;
pub mod update;
pub mod utils;

use anyhow::Result;
use cli::{Pipeline, Registry, RunOutcome};
use std::ffi::OsString;
use std::io;
use system::RealSystem;
use update::{CratesIo, FixedAdvisory, UpdateAdvisory, UpdateChecker};
use utils::default_update_cache_path;

/// Environment variable that turns the update advisory off when set
pub const NO_UPDATE_CHECK_ENV: &str = "OJ_NO_UPDATE_CHECK";

/// Main entry point for the oj library
///
/// Runs the built-in subcommands against the real filesystem, crates.io and
/// the process's standard streams, installing the global log subscriber.
///
/// # Errors
///
/// Returns an error if:
/// - The built-in command table is inconsistent
/// - The command line is malformed (a [`clap::Error`])
/// - Writing to standard output or standard error fails
pub fn run<I, T>(argv: I) -> Result<RunOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let registry = Registry::builtin()?;
    let system = RealSystem::new();

    let advisory: Box<dyn UpdateAdvisory + '_> = if std::env::var_os(NO_UPDATE_CHECK_ENV).is_some()
    {
        Box::new(FixedAdvisory(true))
    } else {
        Box::new(UpdateChecker::new(
            CratesIo::new(),
            &system,
            default_update_cache_path(),
        ))
    };

    let pipeline = Pipeline::new(&registry, advisory.as_ref());
    pipeline.run(argv, &mut io::stdout(), &mut io::stderr(), |config| {
        if let Err(err) = config.install() {
            eprintln!("failed to configure logging: {err}");
        }
    })
}
