pub mod catalog;
pub mod listing;
pub mod price;
pub mod slug;
pub mod status;
pub mod testimonial;

pub use listing::Listing;
