//! Handler for the single-URL shorten endpoint.

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::dto::shorten::{ShortenParams, ShortenResponse};
use crate::error::{AppError, ShortenError};
use crate::state::AppState;

/// Creates a short URL for a single long URL.
///
/// # Endpoint
///
/// `GET /api?url=<string>&dur=<seconds>`
///
/// The `url` parameter may carry the URL embedded in surrounding text; the
/// first URL-shaped substring is shortened. `dur` is the mapping TTL in
/// seconds, 0..=3600.
///
/// # Response
///
/// ```json
/// {
///   "short_url": "https://sho.rt/dca7568",
///   "duration": 120,
///   "already_existed": false
/// }
/// ```
///
/// On success the response carries `Cache-Control: max-age=<dur>` as an
/// advisory hint equal to the mapping's TTL.
///
/// # Errors
///
/// Returns 400 Bad Request when `dur` is missing/non-numeric/negative, above
/// 3600, or no URL can be extracted - in that order.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(params): Query<ShortenParams>,
) -> Result<Response, AppError> {
    let duration: i64 = params
        .dur
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .ok_or(ShortenError::InvalidParams)?;

    let shortened = state.shortener.shorten(&params.url, duration).await?;

    let cache_control = [(
        header::CACHE_CONTROL,
        format!("max-age={}", shortened.duration),
    )];
    Ok((cache_control, Json(ShortenResponse::from(shortened))).into_response())
}
