//! Error handling module
//!
//! Defines the failure taxonomy of the run pipeline and its exit codes

pub mod types;

pub use types::*;
