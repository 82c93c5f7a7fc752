//! Command-line interface module
//!
//! Handles argument parsing, subcommand resolution and the run pipeline

pub mod args;
pub mod pipeline;
pub mod registry;

pub use args::*;
pub use pipeline::*;
pub use registry::*;
