//! Error types for unipkg.
//!
//! Usage errors (bad flags, missing arguments, an unknown source picked at the
//! prompt) and internal errors share one enum so the binary can decide how to
//! report each case. Package manager failures are never turned into errors: their
//! exit codes are relayed as [`CommandStatus`](crate::sources::CommandStatus).

use thiserror::Error;

/// The main error type for unipkg operations.
#[derive(Debug, Error)]
pub enum UnipkgError {
    /// A `-`-prefixed token that is not in the flag table.
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    /// No search term or flag was given.
    #[error("missing search term or flag")]
    MissingArgument,

    /// The interactive selector got an answer outside of y/f/s/n.
    #[error("unknown source '{0}'")]
    UnknownSource(String),

    /// `--completions` was given a shell clap_complete does not know.
    #[error("unsupported shell '{0}'")]
    UnknownShell(String),

    /// A package manager could not be spawned.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// A built-in source definition could not be turned into a command line.
    #[error("Invalid package source: {0}")]
    InvalidSource(String),

    /// Reading the interactive answer failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// File or terminal I/O failures
    #[error("I/O operation failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that use UnipkgError.
pub type Result<T> = std::result::Result<T, UnipkgError>;

impl UnipkgError {
    /// Creates a new CommandFailed error with context.
    pub fn command_failed<S1, S2>(cmd: S1, details: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        UnipkgError::CommandFailed(format!("{}: {}", cmd.into(), details.into()))
    }

    /// Creates a new InvalidSource error with context.
    pub fn invalid_source<S1, S2>(source: S1, msg: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        UnipkgError::InvalidSource(format!("{}: {}", source.into(), msg.into()))
    }

    /// Returns true for mistakes in how the tool was called.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            UnipkgError::UnknownFlag(_)
                | UnipkgError::MissingArgument
                | UnipkgError::UnknownSource(_)
                | UnipkgError::UnknownShell(_)
        )
    }

    /// Returns true when the generic usage message should follow the error.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            UnipkgError::UnknownFlag(_) | UnipkgError::MissingArgument
        )
    }

    /// Returns the error category as a string for logging.
    pub fn category(&self) -> &'static str {
        match self {
            UnipkgError::UnknownFlag(_) => "unknown_flag",
            UnipkgError::MissingArgument => "missing_argument",
            UnipkgError::UnknownSource(_) => "unknown_source",
            UnipkgError::UnknownShell(_) => "unknown_shell",
            UnipkgError::CommandFailed(_) => "command_failed",
            UnipkgError::InvalidSource(_) => "invalid_source",
            UnipkgError::Prompt(_) => "prompt",
            UnipkgError::Io(_) => "io",
        }
    }
}

impl From<dialoguer::Error> for UnipkgError {
    fn from(err: dialoguer::Error) -> Self {
        UnipkgError::Prompt(err.to_string())
    }
}
