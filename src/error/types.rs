//! Custom error types with exit codes

use thiserror::Error;

/// Failure signalled by a subcommand handler
///
/// The run pipeline classifies every handler failure exactly once into one
/// of these two variants before mapping it to an exit code.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CommandError {
    /// The operation is acknowledged but deliberately not implemented
    #[error("not supported: {operation}")]
    NotSupported { operation: String },

    /// Any other failure escaping a handler
    #[error(transparent)]
    Unhandled(#[from] anyhow::Error),
}

impl CommandError {
    /// Marker logged at error level for the `NotSupported` class
    pub const NOT_SUPPORTED_MARKER: &'static str = "NotSupportedError";

    /// Create a not-supported error
    #[inline]
    pub fn not_supported<S: Into<String>>(operation: S) -> Self {
        Self::NotSupported {
            operation: operation.into(),
        }
    }

    /// Whether this failure is the deliberate `NotSupported` class
    #[must_use]
    #[inline]
    pub const fn is_not_supported(&self) -> bool {
        matches!(*self, Self::NotSupported { .. })
    }
}

/// Invalid command table
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two entries share a canonical name
    #[error("duplicate subcommand name: {name}")]
    DuplicateName { name: String },

    /// An alias collides with another alias or a canonical name
    #[error("duplicate subcommand alias '{alias}' (declared by '{name}')")]
    DuplicateAlias { alias: String, name: String },
}

/// Failure inside the update advisory; never surfaces to the user
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AdvisoryError {
    /// Request to the package index failed or timed out
    #[error("package index request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A version string could not be parsed
    #[error("invalid version: {0}")]
    Version(#[from] semver::Error),

    /// The update cache could not be read or written
    #[error("update cache error: {0}")]
    Cache(#[from] std::io::Error),

    /// The update cache is not valid JSON
    #[error("update cache is corrupt: {0}")]
    Json(#[from] serde_json::Error),

    /// No platform cache directory is available
    #[error("no cache directory available")]
    NoCacheDir,
}

/// Final process status of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    /// Get the process exit code for this status
    #[must_use]
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}
