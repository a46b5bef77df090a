//! Flags shared by the commands.
//!
//! Flags are `--name` or `--name=value` and may appear anywhere after the
//! command; everything else is positional.

use crate::CliError;
use ftl_lexer_core::{Checkpoint, LexState};

/// Parsed command-line flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    /// Encoded checkpoint `lex` and `highlight` start from.
    pub initial_state: u32,
    /// Check templates on the rayon pool.
    pub parallel: bool,
    /// Also report templates that pass.
    pub verbose: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            initial_state: 0,
            parallel: true,
            verbose: false,
        }
    }
}

impl CliOptions {
    /// Split `args` into flags and positional arguments.
    pub fn parse(args: &[String]) -> Result<(Self, Vec<String>), CliError> {
        let mut options = Self::default();
        let mut positional = Vec::new();

        for arg in args {
            if let Some(value) = arg.strip_prefix("--state=") {
                options.initial_state = parse_state(value)?;
            } else if arg == "--no-parallel" {
                options.parallel = false;
            } else if arg == "--verbose" || arg == "-v" {
                options.verbose = true;
            } else if arg.starts_with('-') && arg != "-" {
                return Err(CliError::UnknownOption(arg.clone()));
            } else {
                positional.push(arg.clone());
            }
        }

        Ok((options, positional))
    }
}

/// An encoded checkpoint, or a state name such as `IN_DIRECTIVE`.
fn parse_state(value: &str) -> Result<u32, CliError> {
    if let Ok(raw) = value.parse::<u32>() {
        return Ok(raw);
    }
    LexState::ALL
        .into_iter()
        .find(|state| state.name().eq_ignore_ascii_case(value))
        .map(|state| Checkpoint::from(state).encode())
        .ok_or_else(|| CliError::InvalidOption {
            option: "--state",
            value: value.to_string(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
