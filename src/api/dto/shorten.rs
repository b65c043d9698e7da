//! DTOs for the shortening endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{BulkOutcome, Shortened, ShortenRequest};

/// Query parameters for the single shorten endpoint.
///
/// `dur` arrives as a raw string so that a missing or non-numeric value maps
/// to the invalid-params error instead of a transport-level rejection, and
/// `url` defaults to empty so the duration checks still run first.
#[derive(Debug, Deserialize)]
pub struct ShortenParams {
    #[serde(default)]
    pub url: String,
    pub dur: Option<String>,
}

/// Successful single shorten response.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub duration: i64,
    pub already_existed: bool,
}

impl From<Shortened> for ShortenResponse {
    fn from(s: Shortened) -> Self {
        Self {
            short_url: s.short_url,
            duration: s.duration,
            already_existed: s.already_existed,
        }
    }
}

/// Bulk shorten request body: `{"data": [{"url": ..., "duration": ...}]}`.
#[derive(Debug, Deserialize)]
pub struct BulkShortenRequest {
    pub data: Vec<ShortenRequest>,
}

/// Per-item result in a bulk response.
///
/// Absent fields are omitted from the JSON, so successes carry the success
/// fields and failures carry `error` plus whatever context the item had.
#[derive(Debug, Serialize)]
pub struct BulkResultItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_existed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<BulkOutcome> for BulkResultItem {
    fn from(o: BulkOutcome) -> Self {
        Self {
            short_url: o.short_url,
            duration: o.duration,
            original_url: o.original_url,
            already_existed: o.already_existed,
            error: o.error,
        }
    }
}

/// Bulk shorten response body.
#[derive(Debug, Serialize)]
pub struct BulkShortenResponse {
    pub data: Vec<BulkResultItem>,
}
