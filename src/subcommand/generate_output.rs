//! `generate-output` subcommand

use crate::cli::ParsedArguments;
use crate::error::CommandError;
use crate::utils::default_solution_command;
use anyhow::Context as _;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Arguments of `generate-output`
#[derive(Args, Debug, Clone)]
pub struct GenerateOutputArgs {
    /// Paths of input cases (default: all inputs in the directory)
    #[arg(value_name = "TEST")]
    pub tests: Vec<PathBuf>,

    /// Your solution to be run
    #[arg(short, long, value_name = "COMMAND", default_value_t = default_solution_command())]
    pub command: String,

    /// Format of the paths of test cases
    #[arg(short, long, value_name = "FORMAT", default_value = "%s.%e")]
    pub format: String,

    /// Directory containing test cases
    #[arg(short, long, value_name = "DIRECTORY", default_value = "test")]
    pub directory: PathBuf,

    /// Time limit in seconds
    #[arg(short, long, value_name = "TLE")]
    pub tle: Option<f64>,

    /// Number of cases run in parallel
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}

pub fn register(command: clap::Command) -> clap::Command {
    GenerateOutputArgs::augment_args(command.about("generate output files from input and reference implementation"))
}

pub fn handle(parsed: &ParsedArguments) -> Result<(), CommandError> {
    let args: GenerateOutputArgs = parsed
        .subcommand_args()
        .context("failed to read the arguments of generate-output")?;
    super::test::validate_limits(args.tle, None, args.jobs)?;
    debug!("generate-output: {args:?}");

    Err(CommandError::not_supported("generating output files"))
}
