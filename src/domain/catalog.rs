// src/domain/catalog.rs

use crate::api::models::{ListingsEnvelope, RawListing};
use crate::domain::listing::Listing;
use crate::domain::status::is_withdrawn;
use serde_json::Value;
use tracing::warn;

/// Flattens every record in the envelope. Records that do not decode, or that
/// have no object code to link to, are logged and skipped.
pub fn from_envelope(envelope: &ListingsEnvelope) -> Vec<Listing> {
    envelope
        .results
        .iter()
        .filter_map(|value| {
            let parsed = serde_json::from_value::<RawListing>(value.clone())
                .map_err(|e| e.to_string())
                .and_then(|raw| Listing::from_raw(&raw));
            match parsed {
                Ok(listing) => Some(listing),
                Err(reason) => {
                    let id = value.get("id").cloned().unwrap_or(Value::Null);
                    warn!(%id, %reason, "skipping listing");
                    None
                }
            }
        })
        .collect()
}

/// Everything a visitor may see: withdrawn listings removed, input order kept.
pub fn visible(listings: Vec<Listing>) -> Vec<Listing> {
    listings
        .into_iter()
        .filter(|l| !is_withdrawn(l.status.as_deref()))
        .collect()
}

/// Stable sort on the lowercased raw status text.
///
/// This is plain lexicographic order ("beschikbaar" < "verkocht" <
/// "verkocht onder voorbehoud"), not a business priority. Listings without
/// a status sort first.
pub fn sort_by_status(listings: &mut [Listing]) {
    listings.sort_by_cached_key(|l| l.status.as_deref().unwrap_or_default().to_lowercase());
}

/// The overview page collection.
pub fn overview(listings: Vec<Listing>) -> Vec<Listing> {
    let mut shown = visible(listings);
    sort_by_status(&mut shown);
    shown
}

/// Detail lookup by object code. Withdrawn listings are never returned.
pub fn find_visible<'a>(listings: &'a [Listing], object_code: &str) -> Option<&'a Listing> {
    listings
        .iter()
        .filter(|l| !is_withdrawn(l.status.as_deref()))
        .find(|l| l.object_code == object_code)
}
