//! Command-line tools for FreeMarker templates.
//!
//! Library half of the `ftl` binary: command handlers, option parsing, and
//! errors live here so they can be tested without spawning a process.

pub mod commands;
mod error;
mod options;
mod tracing_setup;

pub use error::CliError;
pub use options::CliOptions;
pub use tracing_setup::init_tracing;
