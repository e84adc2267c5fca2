use std::error::Error;
use std::fmt;

/// Failures of a single upstream call. There is no retry; callers see these as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx (and non-202) response; carries the HTTP status code.
    Status(u16),
    /// Connection, body read or JSON decode failure.
    Transport(String),
    /// A well-formed JSON body that does not have the expected shape.
    UnexpectedShape(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(code) => write!(f, "upstream responded with HTTP {code}"),
            ApiError::Transport(msg) => write!(f, "Internal Server Error: {msg}"),
            ApiError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for ApiError {}
