//! CLI error types.

use std::fmt;

use alertctl_client::ClientError;

/// CLI-specific errors.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input, detected before any network call.
    Validation(String),
    /// Invalid or incomplete configuration.
    Config(String),
    /// A client operation failed.
    Client(ClientError),
    /// The operator declined a confirmation prompt.
    Aborted,
    /// Output formatting error.
    Format(String),
    /// IO error.
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "invalid input: {msg}"),
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::Client(e) => write!(f, "{e}"),
            Self::Aborted => write!(f, "aborted, nothing changed"),
            Self::Format(msg) => write!(f, "format error: {msg}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        Self::Client(err)
    }
}
