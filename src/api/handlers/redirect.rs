//! Handler for short URL resolution and redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short identifier and redirects to the original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Request Flow
///
/// 1. Validate the identifier shape (7 alphanumeric characters)
/// 2. Look the key up in the store (reads never extend the TTL)
/// 3. Decode the stored value back into the original URL
/// 4. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed identifier and 404 Not Found when
/// no mapping exists - an expired mapping and one that never existed are
/// indistinguishable.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.shortener.resolve(&id).await?;

    debug!("Redirecting {} -> {}", id, url);
    Ok(Redirect::temporary(&url))
}
