//! Shared helpers for subcommand collaborators
//!
//! Default paths, the platform shell and the message prefixes used in log lines

pub mod path;
pub mod process;

pub use path::*;
pub use process::*;

/// Prefix for log lines reporting a passed check
pub const SUCCESS: &str = "SUCCESS: ";

/// Prefix for log lines reporting a failed check
pub const FAILURE: &str = "FAILURE: ";

/// Prefix for log lines suggesting what the user can try next
pub const HINT: &str = "HINT: ";

/// Prefix for log lines describing network activity
pub const NETWORK: &str = "NETWORK: ";
