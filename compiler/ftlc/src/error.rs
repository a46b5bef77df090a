//! Errors reported by the CLI.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("invalid value '{value}' for {option}")]
    InvalidOption { option: &'static str, value: String },

    #[error("{failed} of {total} template(s) failed lexer checks")]
    CheckFailed { failed: usize, total: usize },
}

impl CliError {
    /// Process exit code: 2 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::UnknownCommand(_)
            | CliError::UnknownOption(_)
            | CliError::MissingArgument(_)
            | CliError::InvalidOption { .. } => 2,
            CliError::Read { .. } | CliError::CheckFailed { .. } => 1,
        }
    }

    /// Whether the usage text should follow the message.
    pub fn is_usage_error(&self) -> bool {
        self.exit_code() == 2
    }
}
