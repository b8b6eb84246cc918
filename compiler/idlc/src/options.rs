//! Command-line options.

use thiserror::Error;

/// Parsed command line: `idlc [--tokens] <file.idl>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    pub path: String,
    /// Print the token stream instead of the module tree.
    pub tokens: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum UsageError {
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

impl Options {
    /// Parse arguments, excluding the program name.
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        let mut path = None;
        let mut tokens = false;

        for arg in args {
            if arg == "--tokens" || arg == "-t" {
                tokens = true;
            } else if arg.starts_with('-') {
                return Err(UsageError::UnknownOption(arg.clone()));
            } else if path.is_none() {
                path = Some(arg.clone());
            } else {
                return Err(UsageError::UnexpectedArgument(arg.clone()));
            }
        }

        let path = path.ok_or(UsageError::MissingPath)?;
        Ok(Options { path, tokens })
    }
}

#[cfg(test)]
mod tests;
