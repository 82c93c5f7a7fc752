//! `login` subcommand

use crate::cli::ParsedArguments;
use crate::error::CommandError;
use anyhow::Context as _;
use clap::{Args, ValueEnum};
use tracing::debug;

/// When to open a web browser for logging in
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UseBrowser {
    Always,
    Auto,
    Never,
}

/// Arguments of `login`
#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    /// URL of the service
    pub url: String,

    #[arg(short, long, value_name = "USERNAME")]
    pub username: Option<String>,

    #[arg(short, long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Check whether you are logged in or not
    #[arg(long)]
    pub check: bool,

    #[arg(long, value_enum, default_value_t = UseBrowser::Auto)]
    pub use_browser: UseBrowser,
}

pub fn register(command: clap::Command) -> clap::Command {
    LoginArgs::augment_args(command.about("login to a service"))
}

pub fn handle(parsed: &ParsedArguments) -> Result<(), CommandError> {
    let args: LoginArgs = parsed
        .subcommand_args()
        .context("failed to read the arguments of login")?;
    debug!("login: url={} cookie={}", args.url, parsed.cookie.display());

    let service = super::recognize_service(&args.url)?;
    if args.check {
        return Err(CommandError::not_supported(format!(
            "checking the login status on {service}"
        )));
    }
    Err(CommandError::not_supported(format!("logging in to {service}")))
}
