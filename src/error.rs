use std::fmt;

/// Failure of a single presence fetch. None of these reach the page: the
/// poller logs them and keeps the last good view.
#[derive(Debug)]
pub enum FetchError {
    /// Transport failure: connect, timeout or body read.
    Http(reqwest::Error),
    /// Upstream answered with a non-success status.
    Status { status: u16, body: String },
    /// Upstream answered `success: false`, e.g. `user_not_monitored`.
    Api { code: String, message: String },
    /// Body was not the expected JSON envelope.
    Decode(serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Http(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Api { .. } => "api",
            FetchError::Decode(_) => "decode",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "HTTP error: {e}"),
            FetchError::Status { status, body } => {
                write!(f, "lanyard returned {status}: {body}")
            }
            FetchError::Api { code, message } => write!(f, "lanyard error {code}: {message}"),
            FetchError::Decode(e) => write!(f, "malformed presence payload: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(e) => Some(e),
            FetchError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Http(e)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e)
    }
}
