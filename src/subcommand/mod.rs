//! Subcommand collaborators
//!
//! Each module exposes `register`, which attaches its flags and help text to
//! the shared parser, and `handle`, which runs the subcommand.

pub mod download;
pub mod generate_input;
pub mod generate_output;
pub mod login;
pub mod submit;
pub mod test_reactive;

use crate::api::Service;
use crate::cli::CommandEntry;
use anyhow::{Result, anyhow};

/// The built-in command table, in help order
#[must_use]
pub fn builtin_entries() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("download", &["d", "dl"], download::register, download::handle),
        CommandEntry::new("login", &["l"], login::register, login::handle),
        CommandEntry::new("submit", &["s"], submit::register, submit::handle),
        CommandEntry::new("test", &["t"], test::register, test::handle),
        CommandEntry::new(
            "generate-output",
            &["g/o"],
            generate_output::register,
            generate_output::handle,
        ),
        CommandEntry::new(
            "generate-input",
            &["g/i"],
            generate_input::register,
            generate_input::handle,
        ),
        CommandEntry::new(
            "test-reactive",
            &["t/r"],
            test_reactive::register,
            test_reactive::handle,
        ),
    ]
}

/// Judge service a URL belongs to
fn recognize_service(url: &str) -> Result<Service> {
    Service::from_url(url).ok_or_else(|| anyhow!("the URL is not supported: {url}"))
}
