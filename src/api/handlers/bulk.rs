//! Handler for the bulk shorten endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::shorten::{BulkResultItem, BulkShortenRequest, BulkShortenResponse};
use crate::error::{AppError, ShortenError};
use crate::state::AppState;

/// Creates short URLs for a batch of 1-50 URLs concurrently.
///
/// # Endpoint
///
/// `POST /api/bulk`
///
/// # Request Body
///
/// ```json
/// {
///   "data": [
///     { "url": "https://example.com", "duration": 120 },
///     { "url": "https://example.org" }
///   ]
/// }
/// ```
///
/// A missing or zero `duration` defaults to 60 seconds.
///
/// # Batch Processing
///
/// Items are processed concurrently and independently: one item's failure
/// never aborts its siblings, and every item reports exactly one result.
/// Result order is not guaranteed to match input order; correlate by
/// `original_url`.
///
/// # Response
///
/// 201 Created for structurally valid batches, even when individual items
/// failed. 400 Bad Request only for batch-level violations: a body that does
/// not parse, an empty batch, or more than 50 items.
pub async fn bulk_shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<BulkShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BulkShortenResponse>), AppError> {
    // Single validated parse; the extractor rejection covers both transport
    // and schema problems.
    let Json(request) = payload.map_err(|_| ShortenError::MalformedBatch)?;

    let outcomes = state.shortener.shorten_bulk(request.data).await?;

    let data = outcomes.into_iter().map(BulkResultItem::from).collect();
    Ok((StatusCode::CREATED, Json(BulkShortenResponse { data })))
}
