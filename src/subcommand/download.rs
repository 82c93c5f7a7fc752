//! `download` subcommand

use crate::cli::ParsedArguments;
use crate::error::CommandError;
use anyhow::Context as _;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Arguments of `download`
#[derive(Args, Debug, Clone)]
pub struct DownloadArgs {
    /// URL of the problem
    pub url: String,

    /// Format of the paths of downloaded sample cases
    #[arg(short, long, value_name = "FORMAT", default_value = "%s.%e")]
    pub format: String,

    /// Directory to write sample cases into
    #[arg(short, long, value_name = "DIRECTORY", default_value = "test")]
    pub directory: PathBuf,

    /// Do not write any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Download system test cases instead of samples
    #[arg(short = 'a', long)]
    pub system: bool,

    /// Don't print the contents of downloaded cases
    #[arg(short, long)]
    pub silent: bool,

    /// Access token for yukicoder
    #[arg(long, value_name = "TOKEN")]
    pub yukicoder_token: Option<String>,
}

pub fn register(command: clap::Command) -> clap::Command {
    DownloadArgs::augment_args(command.about("download sample cases"))
}

pub fn handle(parsed: &ParsedArguments) -> Result<(), CommandError> {
    let args: DownloadArgs = parsed
        .subcommand_args()
        .context("failed to read the arguments of download")?;
    debug!("download: {args:?}");

    let service = super::recognize_service(&args.url)?;
    let what = if args.system { "system cases" } else { "sample cases" };
    Err(CommandError::not_supported(format!(
        "downloading {what} from {service}"
    )))
}
