mod cache;
mod feed;

pub(crate) use cache::parse_envelope;
pub use cache::{KvListingCache, ListingCache};
pub use feed::{ListingFeed, ProviderFeed};
