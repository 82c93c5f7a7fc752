//! Static table of subcommands and their aliases

use crate::cli::args::ParsedArguments;
use crate::error::{CommandError, RegistryError};
use std::collections::HashMap;
use std::fmt;

/// Attaches a subcommand's flags and help text to its parser
pub type Register = fn(clap::Command) -> clap::Command;

/// Runs a subcommand with the parsed arguments
pub type Handler = fn(&ParsedArguments) -> Result<(), CommandError>;

/// One subcommand: canonical name, aliases and its collaborator functions
#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub register: Register,
    pub handler: Handler,
}

impl CommandEntry {
    #[must_use]
    pub const fn new(
        name: &'static str,
        aliases: &'static [&'static str],
        register: Register,
        handler: Handler,
    ) -> Self {
        return Self {
            name,
            aliases,
            register,
            handler,
        };
    }

    /// Whether `token` is the canonical name or one of the aliases
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.aliases.contains(&token)
    }

    /// Parser for this subcommand, with aliases shown in help
    #[must_use]
    pub fn command(&self) -> clap::Command {
        let command = clap::Command::new(self.name).visible_aliases(self.aliases.iter().copied());
        (self.register)(command)
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

/// Validated set of subcommands
///
/// Every canonical name and alias appears at most once across the table.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    /// Build a registry, rejecting tables with colliding tokens
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two entries share a canonical name
    /// - An alias is declared twice or shadows a canonical name
    pub fn new(entries: Vec<CommandEntry>) -> Result<Self, RegistryError> {
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for entry in &entries {
            if owners.insert(entry.name, entry.name).is_some() {
                return Err(RegistryError::DuplicateName {
                    name: entry.name.to_owned(),
                });
            }
        }

        for entry in &entries {
            for alias in entry.aliases {
                if owners.insert(*alias, entry.name).is_some() {
                    return Err(RegistryError::DuplicateAlias {
                        alias: (*alias).to_owned(),
                        name: entry.name.to_owned(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// The subcommands shipped with the tool
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in table has colliding tokens
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(crate::subcommand::builtin_entries())
    }

    /// Find the entry whose name or aliases contain `token`
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.matches(token))
    }

    /// Entries in registration order
    #[must_use]
    #[inline]
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }
}
