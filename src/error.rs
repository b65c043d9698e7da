//! Error taxonomy and HTTP error envelope.
//!
//! [`ShortenError`] is the domain-level taxonomy shared by all workflows;
//! its display strings are the short, human-readable reasons carried in
//! per-item bulk results. [`AppError`] is the HTTP-facing envelope that
//! renders taxonomy entries as JSON with an appropriate status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::store::StoreError;

/// Domain-level failures across the shortening and resolution workflows.
///
/// Display strings double as the user-visible reason; they never expose
/// backend internals.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    /// The duration parameter is missing, non-numeric, or negative.
    #[error("invalid params structure")]
    InvalidParams,

    /// The requested TTL exceeds the 3600 second ceiling.
    #[error("duration too high (max 3600)")]
    DurationTooHigh,

    /// No URL-shaped substring could be extracted from the input.
    #[error("url format not supported")]
    UrlNotSupported,

    /// The identifier is not exactly 7 alphanumeric characters.
    #[error("id format not supported")]
    InvalidIdFormat,

    /// No mapping exists for the identifier (never created, or expired).
    #[error("key not found")]
    KeyNotFound,

    /// The stored value could not be decoded back into a URL.
    #[error("error while decoding stored url")]
    DecodeError,

    /// The key-value backend failed; the source carries the detail for logs.
    #[error("store unavailable")]
    StoreUnavailable(#[source] StoreError),

    /// Bulk batch exceeds the 50 URL limit.
    #[error("max allowed urls is 50")]
    TooManyUrls,

    /// Bulk batch contains no URLs.
    #[error("no urls")]
    NoUrls,

    /// Bulk body could not be parsed at all.
    #[error("unsupported data structure")]
    MalformedBatch,
}

impl ShortenError {
    /// Short reason string carried in per-item bulk results.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl From<StoreError> for ShortenError {
    fn from(e: StoreError) -> Self {
        Self::StoreUnavailable(e)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// HTTP error envelope rendered as `{"error": {code, message, details}}`.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Unavailable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        let message = e.reason();
        match e {
            ShortenError::InvalidParams
            | ShortenError::DurationTooHigh
            | ShortenError::UrlNotSupported
            | ShortenError::InvalidIdFormat
            | ShortenError::TooManyUrls
            | ShortenError::NoUrls
            | ShortenError::MalformedBatch => Self::bad_request(message, json!({})),
            ShortenError::KeyNotFound => Self::not_found(message, json!({})),
            ShortenError::StoreUnavailable(_) => Self::unavailable(message, json!({})),
            ShortenError::DecodeError => Self::internal(message, json!({})),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Unavailable { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "unavailable",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_maps_to_bad_request() {
        for e in [
            ShortenError::InvalidParams,
            ShortenError::DurationTooHigh,
            ShortenError::UrlNotSupported,
            ShortenError::InvalidIdFormat,
            ShortenError::TooManyUrls,
            ShortenError::NoUrls,
            ShortenError::MalformedBatch,
        ] {
            assert!(matches!(AppError::from(e), AppError::Validation { .. }));
        }
    }

    #[test]
    fn test_key_not_found_maps_to_not_found() {
        assert!(matches!(
            AppError::from(ShortenError::KeyNotFound),
            AppError::NotFound { .. }
        ));
    }

    #[test]
    fn test_store_failure_maps_to_unavailable() {
        let e = ShortenError::from(StoreError::Unavailable("refused".into()));
        assert!(matches!(AppError::from(e), AppError::Unavailable { .. }));
    }

    #[test]
    fn test_store_reason_hides_backend_detail() {
        let e = ShortenError::from(StoreError::Operation("SET failed: broken pipe".into()));
        assert_eq!(e.reason(), "store unavailable");
    }

    #[test]
    fn test_reason_strings_match_contract() {
        assert_eq!(ShortenError::NoUrls.reason(), "no urls");
        assert_eq!(ShortenError::TooManyUrls.reason(), "max allowed urls is 50");
        assert_eq!(
            ShortenError::UrlNotSupported.reason(),
            "url format not supported"
        );
    }
}
