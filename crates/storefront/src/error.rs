//! Unified client error handling.
//!
//! Every fallible operation in this crate returns `Result<T, ApiError>`.
//! Page flows catch the error at their boundary and translate it into a
//! user-visible message plus restored control state; only best-effort
//! background calls (the nav badge) are allowed to swallow failures.

use thiserror::Error;

/// Client-level error taxonomy for the storefront.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or rejected session. Surfaced to the shopper as a
    /// redirect-to-login instruction.
    #[error("Please login to continue")]
    AuthRequired,

    /// Client-side form/field validation failed; the request never reached
    /// the network.
    #[error("{0}")]
    Validation(String),

    /// The server rejected the request with a non-2xx status. The message is
    /// the server's own when it supplied one, else a per-endpoint fallback.
    #[error("{message}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Human-readable message for display.
        message: String,
    },

    /// The buyer-restriction gate refused an order (HTTP 403). The message
    /// names the required account type.
    #[error("{0}")]
    Restriction(String),

    /// The requested entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Transport-level failure (connect, timeout, TLS). Retryable by the
    /// caller; the client itself never retries.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the caller may sensibly retry the same request.
    ///
    /// Transport failures and server-side (5xx) rejections are retryable;
    /// everything else needs a different request or a different user.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Remote { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Whether the shopper must (re-)authenticate to proceed.
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::NotFound("Product");
        assert_eq!(err.to_string(), "Product not found");

        let err = ApiError::Remote {
            status: 500,
            message: "Failed to load products".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to load products");

        let err = ApiError::AuthRequired;
        assert_eq!(err.to_string(), "Please login to continue");
    }

    #[test]
    fn test_retryability() {
        assert!(
            ApiError::Remote {
                status: 503,
                message: String::new(),
            }
            .is_retryable()
        );
        assert!(
            !ApiError::Remote {
                status: 403,
                message: String::new(),
            }
            .is_retryable()
        );
        assert!(!ApiError::AuthRequired.is_retryable());
        assert!(!ApiError::Validation("bad email".to_string()).is_retryable());
    }

    #[test]
    fn test_requires_login() {
        assert!(ApiError::AuthRequired.requires_login());
        assert!(!ApiError::NotFound("Order").requires_login());
    }
}
