use thiserror::Error;

/// Error types for a detection round trip.
///
/// Users never see these directly: every variant is shown as the locale's
/// single connection error message. The variants exist for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectionError {
    /// The service answered with a non-success HTTP status
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The request never got a response (DNS, TLS, connection reset, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body was not a valid detection result
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for DetectionError {
    fn from(e: serde_json::Error) -> Self {
        DetectionError::Decode(e.to_string())
    }
}

/// Type alias for Result with DetectionError
pub type Result<T> = std::result::Result<T, DetectionError>;
