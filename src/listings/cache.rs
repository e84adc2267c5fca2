// src/listings/cache.rs

use crate::api::models::ListingsEnvelope;
use crate::api::{ApiClient, ApiError};
use serde_json::Value;
use tracing::{debug, info, warn};

pub const CACHE_KEY_PATH: &str = "kv/values/huizen";

/// Read/write access to the stored copy of the provider feed.
///
/// Public pages only ever read from here; the admin dashboard writes.
pub trait ListingCache: Send + Sync {
    fn load(&self) -> Result<ListingsEnvelope, ApiError>;
    fn replace(&self, payload: &Value) -> Result<(), ApiError>;
}

/// Cache backed by the key/value store's HTTP API.
pub struct KvListingCache {
    client: ApiClient,
}

impl KvListingCache {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ListingCache for KvListingCache {
    fn load(&self) -> Result<ListingsEnvelope, ApiError> {
        let value = self.client.get(CACHE_KEY_PATH)?;
        let envelope = parse_envelope(value)?;
        let pagination = envelope.pagination.as_ref();
        debug!(
            count = envelope.results.len(),
            total = ?pagination.and_then(|p| p.total),
            "loaded cached listings"
        );
        if let Some(next) = pagination.and_then(|p| p.next.as_deref()) {
            warn!(%next, "stored feed is one page of several, later pages are not shown");
        }
        Ok(envelope)
    }

    fn replace(&self, payload: &Value) -> Result<(), ApiError> {
        self.client.put(CACHE_KEY_PATH, payload)?;
        info!("cached listings replaced");
        Ok(())
    }
}

/// An empty store answers with nothing; treat it as no listings.
pub(crate) fn parse_envelope(value: Value) -> Result<ListingsEnvelope, ApiError> {
    if value.is_null() {
        return Ok(ListingsEnvelope::default());
    }
    serde_json::from_value(value).map_err(|e| ApiError::UnexpectedShape(e.to_string()))
}
