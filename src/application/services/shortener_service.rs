//! Shortening and resolution workflows over an injected key-value store.

use std::sync::{Arc, LazyLock};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use tokio::task::JoinSet;
use tracing::warn;

use crate::domain::entities::{BulkOutcome, Shortened, ShortenRequest};
use crate::domain::store::KeyValueStore;
use crate::error::ShortenError;
use crate::utils::code_generator::generate;
use crate::utils::url_extractor::extract_url;

/// Maximum TTL accepted for a mapping, in seconds.
pub const MAX_TTL_SECONDS: i64 = 3600;

/// TTL applied to bulk items that pass a zero duration.
pub const DEFAULT_BULK_TTL_SECONDS: i64 = 60;

/// Upper bound on the number of URLs in one bulk batch.
pub const MAX_BULK_URLS: usize = 50;

/// A well-formed short identifier: exactly 7 alphanumeric characters.
static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{7}$").expect("id pattern must compile"));

/// Service implementing the single, bulk, and resolution workflows.
///
/// Holds no per-request state; the injected store handle is the only shared
/// resource, and it is used read-only by concurrent tasks. First-writer-wins
/// on colliding codes relies entirely on the store's atomic conditional
/// write - the service never retries or perturbs a generated code.
pub struct ShortenerService {
    store: Arc<dyn KeyValueStore>,
    base_url: String,
}

impl ShortenerService {
    /// Creates the service around a store handle and the public host used to
    /// format short URLs.
    pub fn new(store: Arc<dyn KeyValueStore>, base_url: String) -> Self {
        Self {
            store,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Single-request shortening workflow.
    ///
    /// Validation order is part of the contract - callers depend on which
    /// error fires first:
    ///
    /// 1. negative TTL => [`ShortenError::InvalidParams`]
    /// 2. TTL above 3600 => [`ShortenError::DurationTooHigh`]
    /// 3. no URL in the input => [`ShortenError::UrlNotSupported`]
    ///
    /// A zero TTL stores the mapping without expiry.
    ///
    /// # Errors
    ///
    /// See validation order above; store failures surface as
    /// [`ShortenError::StoreUnavailable`].
    pub async fn shorten(
        &self,
        input: &str,
        ttl_seconds: i64,
    ) -> Result<Shortened, ShortenError> {
        if ttl_seconds < 0 {
            return Err(ShortenError::InvalidParams);
        }
        if ttl_seconds > MAX_TTL_SECONDS {
            return Err(ShortenError::DurationTooHigh);
        }

        let url = extract_url(input).map_err(|_| ShortenError::UrlNotSupported)?;
        let (code, encoded) = generate(&url);

        let wrote = self
            .store
            .set_if_absent(&code, &encoded, ttl_seconds as u64)
            .await?;

        Ok(Shortened {
            short_url: self.short_url(&code),
            duration: ttl_seconds,
            already_existed: !wrote,
        })
    }

    /// Bulk shortening pipeline: fan-out, fan-in, exactly one outcome per
    /// item.
    ///
    /// Batch-level preconditions short-circuit before any item work starts:
    /// an empty batch fails with [`ShortenError::NoUrls`], more than 50 items
    /// with [`ShortenError::TooManyUrls`]. Past that gate, each item runs as
    /// its own task with the single-request semantics, except a zero duration
    /// defaults to 60 seconds, and an item failure is captured into that
    /// item's outcome instead of aborting siblings.
    ///
    /// Outcomes are collected in completion order, not input order; each is
    /// tagged with its originating URL. Dropping the returned future aborts
    /// any in-flight items.
    pub async fn shorten_bulk(
        self: Arc<Self>,
        requests: Vec<ShortenRequest>,
    ) -> Result<Vec<BulkOutcome>, ShortenError> {
        if requests.is_empty() {
            return Err(ShortenError::NoUrls);
        }
        if requests.len() > MAX_BULK_URLS {
            return Err(ShortenError::TooManyUrls);
        }

        let mut tasks = JoinSet::new();
        for request in requests {
            let service = Arc::clone(&self);
            tasks.spawn(async move { service.shorten_item(request).await });
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    warn!("bulk item task failed to join: {e}");
                    outcomes.push(BulkOutcome::failure(
                        None,
                        None,
                        "internal error".to_string(),
                    ));
                }
            }
        }
        Ok(outcomes)
    }

    /// Per-item bulk logic; never propagates, always produces an outcome.
    async fn shorten_item(&self, request: ShortenRequest) -> BulkOutcome {
        let ShortenRequest { url: original, duration } = request;

        if duration < 0 {
            return BulkOutcome::failure(
                Some(original),
                Some(duration),
                ShortenError::InvalidParams.reason(),
            );
        }
        if duration > MAX_TTL_SECONDS {
            return BulkOutcome::failure(
                Some(original),
                Some(duration),
                ShortenError::DurationTooHigh.reason(),
            );
        }
        let duration = if duration == 0 {
            DEFAULT_BULK_TTL_SECONDS
        } else {
            duration
        };

        let url = match extract_url(&original) {
            Ok(url) => url,
            Err(_) => {
                return BulkOutcome::failure(
                    Some(original),
                    None,
                    ShortenError::UrlNotSupported.reason(),
                );
            }
        };

        let (code, encoded) = generate(&url);
        match self
            .store
            .set_if_absent(&code, &encoded, duration as u64)
            .await
        {
            Ok(wrote) => BulkOutcome::success(
                original,
                Shortened {
                    short_url: self.short_url(&code),
                    duration,
                    already_existed: !wrote,
                },
            ),
            Err(e) => {
                warn!("bulk item store write failed: {e}");
                BulkOutcome::failure(
                    Some(original),
                    Some(duration),
                    ShortenError::from(e).reason(),
                )
            }
        }
    }

    /// Resolution workflow: identifier to original URL.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidIdFormat`] unless the identifier is exactly
    ///   7 alphanumeric characters
    /// - [`ShortenError::KeyNotFound`] on a store miss (never created and
    ///   expired look identical)
    /// - [`ShortenError::DecodeError`] when the stored value is not valid
    ///   base64 or not valid UTF-8
    pub async fn resolve(&self, identifier: &str) -> Result<String, ShortenError> {
        if !ID_REGEX.is_match(identifier) {
            return Err(ShortenError::InvalidIdFormat);
        }

        let encoded = self
            .store
            .get(identifier)
            .await?
            .ok_or(ShortenError::KeyNotFound)?;

        let bytes = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|_| ShortenError::DecodeError)?;
        String::from_utf8(bytes).map_err(|_| ShortenError::DecodeError)
    }

    /// Full short URL for a code on the configured public host.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
