// src/listings/feed.rs

use crate::api::{ApiClient, ApiError};
use serde_json::Value;
use tracing::info;

/// Active residential listings, first page of up to 100 records.
pub const ACTIVE_LISTINGS_PATH: &str = "wonen/v3/objecten?actief=true&aantal=100";

/// Live access to the listing provider.
pub trait ListingFeed: Send + Sync {
    fn fetch_active(&self) -> Result<Value, ApiError>;
}

pub struct ProviderFeed {
    client: ApiClient,
}

impl ProviderFeed {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ListingFeed for ProviderFeed {
    fn fetch_active(&self) -> Result<Value, ApiError> {
        let value = self.client.get(ACTIVE_LISTINGS_PATH)?;
        let count = value
            .get("resultaten")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        info!(count, "fetched active listings from provider");
        Ok(value)
    }
}
