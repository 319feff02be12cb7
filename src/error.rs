//! Error types for talking to the stadium backend.

use thiserror::Error;

/// Failure of a single HTTP exchange with the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, CORS rejection, ...
    #[error("transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// Non-success status with a body the caller could not use
    #[error("unexpected HTTP status {code}")]
    Status { code: u16, body: String },

    /// Body was not the JSON shape the endpoint promises
    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

/// Why a login or registration did not produce a session.
///
/// Carried next to the boolean outcome so the UI can explain a failure
/// without callers having to match on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// Backend unreachable or timed out
    Transport,
    /// Backend answered and said no
    Rejected { message: Option<String> },
    /// Backend answered with something unreadable
    Malformed,
    /// A newer session operation finished first; this result was discarded
    Superseded,
}

impl std::fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "Could not reach the stadium server"),
            Self::Rejected { message: Some(m) } => write!(f, "{m}"),
            Self::Rejected { message: None } => write!(f, "Request was rejected"),
            Self::Malformed => write!(f, "Unexpected response from the stadium server"),
            Self::Superseded => write!(f, "Session changed while the request was in flight"),
        }
    }
}

impl From<&ApiError> for AuthFailure {
    fn from(e: &ApiError) -> Self {
        match e {
            ApiError::Transport(_) | ApiError::Timeout(_) | ApiError::InvalidUrl(_) => {
                Self::Transport
            }
            ApiError::Status { .. } => Self::Rejected { message: None },
            ApiError::Decode(_) => Self::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_classification() {
        assert_eq!(
            AuthFailure::from(&ApiError::Timeout(10)),
            AuthFailure::Transport
        );
        assert_eq!(
            AuthFailure::from(&ApiError::Status {
                code: 500,
                body: String::new()
            }),
            AuthFailure::Rejected { message: None }
        );
        assert_eq!(
            AuthFailure::from(&ApiError::Decode("eof".into())),
            AuthFailure::Malformed
        );
    }

    #[test]
    fn test_rejection_message_display() {
        let failure = AuthFailure::Rejected {
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(failure.to_string(), "Invalid credentials");
    }
}
