// src/domain/slug.rs

use crate::domain::listing::Listing;

pub const DETAIL_PREFIX: &str = "/huizen/detail";

/// Lowercase, drop everything outside `[a-zA-Z0-9 ]`, then spaces -> hyphens.
pub fn slug_segment(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Canonical detail link:
/// `/huizen/detail/{city}/{street}{number}[-{suffix}]/{objectcode}`.
///
/// The city goes through `slug_segment` like the street, so "Den Haag"
/// becomes `den-haag`. Only the object code is used to resolve the page; the
/// address parts are there for people and search engines.
pub fn detail_path(listing: &Listing) -> String {
    let city = slug_segment(&listing.city);

    let mut address = slug_segment(&listing.street);
    address.push_str(&slug_segment(&listing.house_number));

    if let Some(suffix) = listing.house_number_suffix.as_deref().map(slug_segment) {
        if !suffix.is_empty() {
            address.push('-');
            address.push_str(&suffix);
        }
    }

    format!("{DETAIL_PREFIX}/{city}/{address}/{}", listing.object_code)
}
