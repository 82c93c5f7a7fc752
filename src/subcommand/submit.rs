//! `submit` subcommand

use crate::cli::ParsedArguments;
use crate::error::CommandError;
use crate::system::{RealSystem, System};
use anyhow::{Context as _, anyhow};
use clap::Args;
use std::path::Path;
use tracing::debug;

/// Arguments of `submit`
#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Optional URL of the problem followed by the source file
    #[arg(value_name = "[URL] FILE", num_args = 1..=2, required = true)]
    pub targets: Vec<String>,

    /// Language ID to submit as
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Don't guess the language from the file
    #[arg(long)]
    pub no_guess: bool,

    /// Don't confirm before submitting
    #[arg(short, long)]
    pub yes: bool,

    /// Seconds to wait before submitting
    #[arg(short, long, value_name = "SECOND", default_value_t = 3)]
    pub wait: u64,

    /// Don't open the result page after submitting
    #[arg(long)]
    pub no_open: bool,
}

impl SubmitArgs {
    /// Split the positional targets into the URL and the file
    #[must_use]
    pub fn url_and_file(&self) -> (Option<&str>, &Path) {
        match self.targets.as_slice() {
            [url, file] => (Some(url.as_str()), Path::new(file)),
            [file, ..] => (None, Path::new(file)),
            [] => (None, Path::new("")),
        }
    }
}

pub fn register(command: clap::Command) -> clap::Command {
    SubmitArgs::augment_args(command.about("submit your solution"))
}

pub fn handle(parsed: &ParsedArguments) -> Result<(), CommandError> {
    let args: SubmitArgs = parsed
        .subcommand_args()
        .context("failed to read the arguments of submit")?;
    submit(&args, &RealSystem::new())
}

/// Check the submission and hand it to the judge
///
/// # Errors
///
/// Returns an error if:
/// - The source file does not exist
/// - No URL is given, or the URL belongs to no known judge
/// - Submitting to the recognised judge is not supported
pub fn submit(args: &SubmitArgs, system: &dyn System) -> Result<(), CommandError> {
    let (url, file) = args.url_and_file();
    debug!("submit: url={url:?} file={}", file.display());

    if !system.is_file(file) {
        return Err(anyhow!("file not found: {}", file.display()).into());
    }
    let Some(url) = url else {
        return Err(anyhow!("the URL of the problem is not given").into());
    };

    let service = super::recognize_service(url)?;
    Err(CommandError::not_supported(format!("submitting to {service}")))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;
    use clap::FromArgMatches as _;

    fn parse(argv: &[&str]) -> SubmitArgs {
        let command = register(clap::Command::new("submit"));
        let matches = command.try_get_matches_from(argv).unwrap();
        SubmitArgs::from_arg_matches(&matches).unwrap()
    }

    #[test]
    fn test_file_only() {
        let args = parse(&["submit", "main.cpp"]);
        assert_eq!(args.url_and_file(), (None, Path::new("main.cpp")));
    }

    #[test]
    fn test_url_and_file() {
        let args = parse(&["submit", "https://atcoder.jp/contests/abc100/tasks/abc100_a", "main.cpp"]);
        assert_eq!(
            args.url_and_file(),
            (
                Some("https://atcoder.jp/contests/abc100/tasks/abc100_a"),
                Path::new("main.cpp")
            )
        );
        assert_eq!(args.wait, 3);
    }

    #[test]
    fn test_missing_file_is_unhandled() {
        let system = MockSystem::new();
        let args = parse(&["submit", "https://atcoder.jp/contests/abc100/tasks/abc100_a", "/src/main.cpp"]);
        let err = submit(&args, &system).unwrap_err();
        assert!(!err.is_not_supported());
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_missing_url_is_unhandled() {
        let system = MockSystem::new().with_file("/src/main.cpp", b"int main() {}").unwrap();
        let args = parse(&["submit", "/src/main.cpp"]);
        let err = submit(&args, &system).unwrap_err();
        assert!(err.to_string().contains("URL"));
    }

    #[test]
    fn test_known_judge_is_not_supported() {
        let system = MockSystem::new().with_file("/src/main.cpp", b"int main() {}").unwrap();
        let args = parse(&["submit", "https://codeforces.com/contest/1/problem/A", "/src/main.cpp"]);
        let err = submit(&args, &system).unwrap_err();
        assert!(err.is_not_supported());
        assert!(err.to_string().contains("Codeforces"));
    }
}
