//! Error types for the Grafana client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Grafana that has no more specific variant.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from Grafana.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Maximum retries exceeded; carries the last error seen.
    #[error("Maximum retries exceeded ({0} attempts): {1}")]
    MaxRetriesExceeded(usize, Box<ClientError>),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Missing API token at construction time.
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Not found (HTTP 404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Save rejected because the stored version changed (HTTP 412).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Payload rejected by Grafana (HTTP 400).
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Token missing, expired, or invalid (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Token valid but lacks the required permission (HTTP 403).
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

impl ClientError {
    /// Map a non-success HTTP status into the matching error variant.
    pub fn from_status(status: u16, url: String, message: String) -> Self {
        match status {
            400 => Self::ValidationError(message),
            401 => Self::Unauthorized(message),
            403 => Self::PermissionDenied(message),
            404 => Self::NotFound(url),
            412 => Self::Conflict(message),
            _ => Self::ApiError {
                status,
                url,
                message,
            },
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable: 429 (rate limited), 502, 503, 504 (transient gateway errors).
    /// Everything else fails immediately.
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error indicates the credential itself was rejected.
    ///
    /// Looks through `MaxRetriesExceeded` to the underlying error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Unauthorized(_) | Self::PermissionDenied(_) | Self::MissingCredential(_) => true,
            Self::MaxRetriesExceeded(_, inner) => inner.is_auth_error(),
            _ => false,
        }
    }
}
