//! Error types for the Study Buddy client.

/// Errors surfaced by the client library.
///
/// Authentication failures never carry a payload: by the time a caller sees
/// `SessionExpired` the session has already been torn down and a redirect to
/// the login page has been issued.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Session expired")]
    SessionExpired,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// True for errors that mean the user has to log in again.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Error::SessionExpired | Error::Unauthenticated)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
