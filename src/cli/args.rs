use crate::cli::registry::Registry;
use crate::utils::default_cookie_path;
use clap::{ArgMatches, CommandFactory as _, FromArgMatches, Parser};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;

const TIPS: &str = "\
tips:
  The official tutorial exists on the web: https://github.com/online-judge-tools/oj/blob/master/docs/getting-started.md";

/// Global options accepted before the subcommand
#[derive(Parser, Debug, Clone)]
#[command(name = "oj")]
#[command(about = "Tools for online judge services")]
#[command(after_help = TIPS)]
#[command(disable_version_flag = true)]
pub struct GlobalArgs {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to cookie
    #[arg(short, long, value_name = "PATH")]
    pub cookie: Option<PathBuf>,

    /// Print the online-judge-tools version number
    #[arg(long)]
    pub version: bool,
}

/// Result of parsing one command line
#[derive(Clone)]
pub struct ParsedArguments {
    pub verbose: bool,
    pub cookie: PathBuf,
    pub version: bool,
    /// Subcommand token as resolved by the parser, if any was given
    pub subcommand: Option<String>,
    external: bool,
    matches: ArgMatches,
}

impl ParsedArguments {
    /// Split parser matches into the global options and the subcommand part
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The matches were not produced by [`build_parser`]
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let globals = GlobalArgs::from_arg_matches(matches)?;
        let (subcommand, sub_matches) = match matches.subcommand() {
            Some((name, sub_matches)) => (Some(name.to_owned()), sub_matches.clone()),
            None => (None, ArgMatches::default()),
        };
        let external = is_external(&sub_matches);

        Ok(Self {
            verbose: globals.verbose,
            cookie: globals.cookie.unwrap_or_else(default_cookie_path),
            version: globals.version,
            subcommand,
            external,
            matches: sub_matches,
        })
    }

    /// Whether the token was not one of the declared subcommands
    ///
    /// A declared name can still arrive this way, e.g. after `--`.
    #[must_use]
    #[inline]
    pub const fn is_external(&self) -> bool {
        self.external
    }

    /// Matches owned by the subcommand's own flags
    #[must_use]
    #[inline]
    pub const fn subcommand_matches(&self) -> &ArgMatches {
        &self.matches
    }

    /// Decode the subcommand's flags into its argument struct
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The matches do not belong to `T`'s subcommand
    pub fn subcommand_args<T: FromArgMatches>(&self) -> Result<T, clap::Error> {
        T::from_arg_matches(&self.matches)
    }
}

impl fmt::Debug for ParsedArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedArguments")
            .field("verbose", &self.verbose)
            .field("cookie", &self.cookie)
            .field("version", &self.version)
            .field("subcommand", &self.subcommand)
            .field("external", &self.external)
            .field("values", &matched_values(&self.matches))
            .finish()
    }
}

/// clap files the arguments of an external subcommand under the empty id
fn is_external(matches: &ArgMatches) -> bool {
    matches.ids().any(|id| id.as_str().is_empty())
}

fn matched_values(matches: &ArgMatches) -> BTreeMap<&str, Vec<&OsStr>> {
    matches
        .ids()
        .map(|id| {
            let values = matches
                .try_get_raw(id.as_str())
                .ok()
                .flatten()
                .map(Iterator::collect)
                .unwrap_or_default();
            (id.as_str(), values)
        })
        .collect()
}

/// Build the parser from the global options and every registered subcommand
///
/// Unknown subcommand tokens are accepted by the parser so the dispatcher can
/// report them.
#[must_use]
pub fn build_parser(registry: &Registry) -> clap::Command {
    let default_cookie = default_cookie_path();
    let mut command = GlobalArgs::command()
        .mut_arg("cookie", |arg| {
            arg.help(format!(
                "path to cookie. (default: {})",
                default_cookie.display()
            ))
        })
        .allow_external_subcommands(true);

    for entry in registry.entries() {
        command = command.subcommand(entry.command());
    }

    command
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::cli::registry::Registry;

    fn parse(argv: &[&str]) -> ParsedArguments {
        let registry = Registry::builtin().unwrap();
        let matches = build_parser(&registry).try_get_matches_from(argv).unwrap();
        ParsedArguments::from_matches(&matches).unwrap()
    }

    #[test]
    fn test_defaults() {
        let parsed = parse(&["oj"]);
        assert!(!parsed.verbose);
        assert!(!parsed.version);
        assert_eq!(parsed.cookie, default_cookie_path());
        assert_eq!(parsed.subcommand, None);
    }

    #[test]
    fn test_global_flags() {
        let parsed = parse(&["oj", "-v", "-c", "/tmp/cookie.jar", "--version"]);
        assert!(parsed.verbose);
        assert!(parsed.version);
        assert_eq!(parsed.cookie, PathBuf::from("/tmp/cookie.jar"));
    }

    #[test]
    fn test_alias_resolves_to_canonical_name() {
        let parsed = parse(&["oj", "dl", "https://atcoder.jp/contests/abc100/tasks/abc100_a"]);
        assert_eq!(parsed.subcommand.as_deref(), Some("download"));
        assert_eq!(
            parsed
                .subcommand_matches()
                .get_one::<String>("url")
                .map(String::as_str),
            Some("https://atcoder.jp/contests/abc100/tasks/abc100_a")
        );
    }

    #[test]
    fn test_unknown_subcommand_is_kept() {
        let parsed = parse(&["oj", "frobnicate", "--anything"]);
        assert_eq!(parsed.subcommand.as_deref(), Some("frobnicate"));
        assert!(parsed.is_external());
    }

    #[test]
    fn test_declared_name_after_separator_is_external() {
        let parsed = parse(&["oj", "--", "download", "https://atcoder.jp/"]);
        assert_eq!(parsed.subcommand.as_deref(), Some("download"));
        assert!(parsed.is_external());

        let parsed = parse(&["oj", "download", "https://atcoder.jp/"]);
        assert!(!parsed.is_external());
    }

    #[test]
    fn test_debug_lists_matched_values() {
        let parsed = parse(&["oj", "-v", "d", "https://atcoder.jp/contests/abc100/tasks/abc100_a"]);
        let rendered = format!("{parsed:?}");
        assert!(rendered.contains("subcommand: Some(\"download\")"));
        assert!(rendered.contains("\"url\": [\"https://atcoder.jp/contests/abc100/tasks/abc100_a\"]"));
        assert!(!rendered.contains("MatchedArg"));
        assert!(!rendered.contains("AnyValue"));
    }

    #[test]
    fn test_parser_is_consistent() {
        let registry = Registry::builtin().unwrap();
        build_parser(&registry).debug_assert();
    }
}
