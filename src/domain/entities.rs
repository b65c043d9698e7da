//! Core request and result types for the shortening workflows.

use serde::Deserialize;

/// One URL + TTL pair submitted to the bulk pipeline.
///
/// A missing or zero `duration` is defaulted to 60 seconds by the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(default)]
    pub duration: i64,
}

/// Successful outcome of the single-request workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    /// Full short URL on the configured public host.
    pub short_url: String,
    /// TTL attached to the mapping, in seconds.
    pub duration: i64,
    /// True when the code was already mapped and the write was a no-op.
    pub already_existed: bool,
}

/// Tagged per-item outcome of the bulk pipeline.
///
/// Exactly one of the success fields or `error` is meaningful. Outcomes are
/// tagged with their originating URL because the pipeline does not preserve
/// input order.
#[derive(Debug, Clone)]
pub struct BulkOutcome {
    pub original_url: Option<String>,
    pub duration: Option<i64>,
    pub short_url: Option<String>,
    pub already_existed: Option<bool>,
    pub error: Option<String>,
}

impl BulkOutcome {
    /// Outcome for an item whose mapping was stored (or already present).
    pub fn success(original_url: String, shortened: Shortened) -> Self {
        Self {
            original_url: Some(original_url),
            duration: Some(shortened.duration),
            short_url: Some(shortened.short_url),
            already_existed: Some(shortened.already_existed),
            error: None,
        }
    }

    /// Outcome for an item that failed; `duration` is echoed when the item
    /// got far enough for it to be meaningful.
    pub fn failure(original_url: Option<String>, duration: Option<i64>, error: String) -> Self {
        Self {
            original_url,
            duration,
            short_url: None,
            already_existed: None,
            error: Some(error),
        }
    }
}
