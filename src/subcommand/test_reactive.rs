//! `test-reactive` subcommand
//!
//! Runs the solution and an interactive judge with their standard streams
//! connected to each other: the solution's output is the judge's input and
//! the judge's output is the solution's input. Both inherit stderr.

use crate::cli::ParsedArguments;
use crate::error::CommandError;
use crate::utils::{FAILURE, SUCCESS, default_solution_command, shell_command};
use anyhow::{Context as _, Result};
use clap::Args;
use std::process::{ExitStatus, Stdio};
use tracing::{debug, info};

/// Arguments of `test-reactive`
#[derive(Args, Debug, Clone)]
pub struct TestReactiveArgs {
    /// Judge program using standard I/O
    #[arg(value_name = "JUDGE")]
    pub judge: String,

    /// Your solution to be tested
    #[arg(short, long, value_name = "COMMAND", default_value_t = default_solution_command())]
    pub command: String,
}

/// Exit statuses of one reactive run
#[derive(Debug, Clone, Copy)]
pub struct ReactiveReport {
    pub solution: ExitStatus,
    pub judge: ExitStatus,
}

/// Judge's decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
}

impl ReactiveReport {
    /// The judge decides; a zero exit status means the answer was accepted
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.judge.success() {
            Verdict::Accepted
        } else {
            Verdict::WrongAnswer
        }
    }

    /// Whether the solution itself terminated abnormally
    #[must_use]
    pub fn solution_failed(&self) -> bool {
        !self.solution.success()
    }
}

fn describe(status: ExitStatus) -> String {
    status
        .code()
        .map_or_else(|| status.to_string(), |code| code.to_string())
}

/// Run `command` against `judge` and wait for both to exit
///
/// # Errors
///
/// Returns an error if:
/// - Either program cannot be started
/// - Waiting for either program fails
pub fn run_reactive(command: &str, judge: &str) -> Result<ReactiveReport> {
    let mut solution = shell_command(command)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start the solution: {command}"))?;

    let to_solution = solution
        .stdin
        .take()
        .context("the solution's standard input is not available")?;
    let from_solution = solution
        .stdout
        .take()
        .context("the solution's standard output is not available")?;

    // The Command holding the pipe ends is a temporary, so the parent's copies
    // are closed as soon as the judge is spawned.
    let spawned = shell_command(judge)
        .stdin(Stdio::from(from_solution))
        .stdout(Stdio::from(to_solution))
        .spawn();
    let mut judge_process = match spawned {
        Ok(process) => process,
        Err(err) => {
            if let Err(kill_err) = solution.kill() {
                debug!("failed to stop the solution: {kill_err}");
            }
            if let Err(wait_err) = solution.wait() {
                debug!("failed to wait for the stopped solution: {wait_err}");
            }
            return Err(err).with_context(|| format!("failed to start the judge: {judge}"));
        }
    };

    let solution_status = solution.wait().context("failed to wait for the solution")?;
    let judge_status = judge_process
        .wait()
        .context("failed to wait for the judge")?;

    Ok(ReactiveReport {
        solution: solution_status,
        judge: judge_status,
    })
}

pub fn register(command: clap::Command) -> clap::Command {
    TestReactiveArgs::augment_args(command.about("test for reactive problem").after_help(
        "tips:\n  You can do similar things with shell\n    e.g. $ mkfifo a.pipe && ./a.out < a.pipe | python3 judge.py > a.pipe",
    ))
}

pub fn handle(parsed: &ParsedArguments) -> Result<(), CommandError> {
    let args: TestReactiveArgs = parsed
        .subcommand_args()
        .context("failed to read the arguments of test-reactive")?;
    debug!("test-reactive: command={} judge={}", args.command, args.judge);

    let report = run_reactive(&args.command, &args.judge)?;
    if report.solution_failed() {
        info!("{FAILURE}RE: solution returns {}", describe(report.solution));
    }
    match report.verdict() {
        Verdict::Accepted => info!("{SUCCESS}AC"),
        Verdict::WrongAnswer => info!("{FAILURE}WA: judge returns {}", describe(report.judge)),
    }

    Ok(())
}
