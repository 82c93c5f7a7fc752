//! `generate-input` subcommand

use crate::cli::ParsedArguments;
use crate::error::CommandError;
use anyhow::{Context as _, ensure};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Arguments of `generate-input`
#[derive(Args, Debug, Clone)]
pub struct GenerateInputArgs {
    /// Your program to generate test cases
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// The number of cases to generate
    #[arg(value_name = "COUNT")]
    pub count: Option<usize>,

    /// Format of the paths of generated cases
    #[arg(short, long, value_name = "FORMAT", default_value = "%s.%e")]
    pub format: String,

    /// Directory to write generated cases into
    #[arg(short, long, value_name = "DIRECTORY", default_value = "test")]
    pub directory: PathBuf,

    /// Time limit in seconds
    #[arg(short, long, value_name = "TLE")]
    pub tle: Option<f64>,

    /// Number of cases generated in parallel
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Number of digits in the names of generated cases
    #[arg(long, value_name = "WIDTH", default_value_t = 3)]
    pub width: usize,

    /// Base name of generated cases
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Reference solution used to look for hacking cases
    #[arg(long, visible_alias = "hack", value_name = "COMMAND")]
    pub hack_expected: Option<String>,

    /// Solution to hack
    #[arg(long, value_name = "COMMAND", requires = "hack_expected")]
    pub hack_actual: Option<String>,
}

pub fn register(command: clap::Command) -> clap::Command {
    GenerateInputArgs::augment_args(command.about("generate input files from given generator"))
}

pub fn handle(parsed: &ParsedArguments) -> Result<(), CommandError> {
    let args: GenerateInputArgs = parsed
        .subcommand_args()
        .context("failed to read the arguments of generate-input")?;
    super::test::validate_limits(args.tle, None, args.jobs)?;
    ensure_positive_width(args.width)?;
    debug!("generate-input: {args:?}");

    Err(CommandError::not_supported("generating input files"))
}

fn ensure_positive_width(width: usize) -> anyhow::Result<()> {
    ensure!(width > 0, "--width must be at least 1");
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::cli::{Registry, build_parser};

    fn parse(argv: &[&str]) -> Result<ParsedArguments, clap::Error> {
        let registry = Registry::builtin().unwrap();
        let matches = build_parser(&registry).try_get_matches_from(argv)?;
        ParsedArguments::from_matches(&matches)
    }

    fn unhandled_message(argv: &[&str]) -> String {
        match handle(&parse(argv).unwrap()) {
            Err(CommandError::Unhandled(cause)) => format!("{cause:#}"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let args: GenerateInputArgs = parse(&["oj", "g/i", "./gen.py"])
            .unwrap()
            .subcommand_args()
            .unwrap();
        assert_eq!(args.command, "./gen.py");
        assert_eq!(args.count, None);
        assert_eq!(args.width, 3);
        assert_eq!(args.directory, PathBuf::from("test"));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let message = unhandled_message(&["oj", "g/i", "--width", "0", "./gen.py"]);
        assert!(message.contains("--width"));
    }

    #[test]
    fn test_non_positive_limits_are_rejected() {
        let message = unhandled_message(&["oj", "g/i", "-j", "0", "./gen.py"]);
        assert!(message.contains("--jobs"));

        let message = unhandled_message(&["oj", "g/i", "--tle=0", "./gen.py"]);
        assert!(message.contains("--tle"));
    }

    #[test]
    fn test_hack_actual_requires_hack_expected() {
        assert!(parse(&["oj", "g/i", "--hack-actual", "./a.out", "./gen.py"]).is_err());

        let args: GenerateInputArgs = parse(&[
            "oj",
            "g/i",
            "--hack",
            "./naive",
            "--hack-actual",
            "./a.out",
            "./gen.py",
        ])
        .unwrap()
        .subcommand_args()
        .unwrap();
        assert_eq!(args.hack_expected.as_deref(), Some("./naive"));
        assert_eq!(args.hack_actual.as_deref(), Some("./a.out"));
    }

    #[test]
    fn test_valid_arguments_are_not_supported() {
        let err = handle(&parse(&["oj", "generate-input", "./gen.py", "10"]).unwrap()).unwrap_err();
        match err {
            CommandError::NotSupported { ref operation } => {
                assert_eq!(operation, "generating input files");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
