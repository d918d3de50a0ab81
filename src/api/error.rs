use std::fmt;

/// Failure talking to the backend.
#[derive(Debug)]
pub enum ApiError {
    /// No backend origin was configured.
    MissingBaseUrl,
    /// A resource id cannot be used as a single path segment.
    InvalidId(String),
    /// Connection, TLS or body transfer failure.
    Transport(reqwest::Error),
    /// The backend answered with a non-success status.
    Status {
        /// HTTP status code.
        code: u16,
        /// Request path that failed.
        path: String,
    },
    /// The body was not the JSON shape we expected.
    Decode(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBaseUrl => write!(f, "backend origin is not configured"),
            Self::InvalidId(id) => write!(f, "invalid resource id: {id:?}"),
            Self::Transport(err) => write!(f, "network error: {err}"),
            Self::Status { code, path } => write!(f, "{path} returned HTTP {code}"),
            Self::Decode(err) => write!(f, "unexpected response body: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::MissingBaseUrl | Self::InvalidId(_) | Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}
