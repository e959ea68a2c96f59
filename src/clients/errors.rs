//! Transport-level error types for the Creem API SDK.
//!
//! [`TransportError`] describes why an HTTP exchange did not produce a
//! response at all. It is always surfaced to callers wrapped in
//! [`CreemError::Http`](crate::CreemError::Http), whose message carries the
//! `http.Do Error: ` prefix.
//!
//! # Example
//!
//! ```rust,ignore
//! use creem::{CreemError, TransportError};
//!
//! match client.get_product(&ctx, "prod_1").await {
//!     Err(CreemError::Http(TransportError::Canceled)) => println!("caller gave up"),
//!     Err(CreemError::Http(e)) => println!("network trouble: {e}"),
//!     Err(e) => println!("rejected locally: {e}"),
//!     Ok(rsp) => println!("status code {}", rsp.code),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP exchange fails before a response is available.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The per-call [`Context`](crate::clients::Context) was cancelled.
    #[error("context canceled")]
    Canceled,

    /// The per-call [`Context`](crate::clients::Context) deadline passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// The response body exceeded the configured maximum size.
    #[error("response body exceeds the {limit} byte limit")]
    BodyTooLarge {
        /// The configured limit in bytes.
        limit: usize,
    },

    /// A header name or value could not be sent on the wire.
    #[error("invalid request header '{name}'")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// The request body could not be serialized as JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The underlying reqwest client failed.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A custom [`HttpEngine`](crate::clients::HttpEngine) failed.
    #[error("{0}")]
    Engine(String),
}

impl TransportError {
    /// Returns `true` if the exchange stopped because the caller's context
    /// was cancelled or its deadline passed.
    #[must_use]
    pub const fn is_context_done(&self) -> bool {
        matches!(self, Self::Canceled | Self::DeadlineExceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_errors_are_flagged() {
        assert!(TransportError::Canceled.is_context_done());
        assert!(TransportError::DeadlineExceeded.is_context_done());
        assert!(!TransportError::BodyTooLarge { limit: 1 }.is_context_done());
        assert!(!TransportError::Engine("boom".to_string()).is_context_done());
    }

    #[test]
    fn test_body_too_large_message_includes_limit() {
        let error = TransportError::BodyTooLarge { limit: 1_048_576 };
        assert_eq!(
            error.to_string(),
            "response body exceeds the 1048576 byte limit"
        );
    }

    #[test]
    fn test_invalid_header_message() {
        let error = TransportError::InvalidHeader {
            name: "bad header".to_string(),
        };
        assert_eq!(error.to_string(), "invalid request header 'bad header'");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &TransportError::Canceled;
        let _ = error;
    }
}
