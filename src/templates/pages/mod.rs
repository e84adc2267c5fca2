pub mod admin;
pub mod about;
pub mod error;
pub mod home;
pub mod listing_detail;
pub mod listings;
pub mod mediation;
pub mod real_estate;
pub mod real_estate_mediation;
pub mod reviews;

pub use about::about_page;
pub use admin::{admin_dashboard_page, admin_login_page, Notice};
pub use error::error_page;
pub use home::home_page;
pub use listing_detail::listing_detail_page;
pub use listings::listings_page;
pub use mediation::mediation_page;
pub use real_estate::real_estate_page;
pub use real_estate_mediation::real_estate_mediation_page;
pub use reviews::reviews_page;
