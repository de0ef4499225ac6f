use std::fmt;

/// Custom error type for GoLinks operations
#[derive(Debug)]
pub enum GolinksError {
    /// Missing or empty token, or other unusable configuration
    Config(String),
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// Request did not complete within the client timeout
    Timeout(String),
    /// API returned a non-2xx response
    Api { status: u16, body: String },
    /// Successful response body could not be decoded
    Json(String),
    /// Request rejected locally before anything was sent
    Validation(String),
}

impl GolinksError {
    /// HTTP status code for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            GolinksError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the API answered 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl fmt::Display for GolinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GolinksError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GolinksError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GolinksError::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            GolinksError::Api { status, body } => {
                write!(f, "status: {}, body: {}", status, body)
            }
            GolinksError::Json(msg) => write!(f, "JSON error: {}", msg),
            GolinksError::Validation(msg) => write!(f, "Invalid link: {}", msg),
        }
    }
}

impl std::error::Error for GolinksError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GolinksError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GolinksError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GolinksError::Timeout(err.to_string())
        } else {
            GolinksError::Http(err)
        }
    }
}

impl From<serde_json::Error> for GolinksError {
    fn from(err: serde_json::Error) -> Self {
        GolinksError::Json(err.to_string())
    }
}

/// Result type alias for GoLinks operations
pub type Result<T> = std::result::Result<T, GolinksError>;
