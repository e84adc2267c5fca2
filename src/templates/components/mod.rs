pub mod alert;
pub mod badge;
pub mod card;
pub mod features;
pub mod section;

pub use alert::{alert, AlertKind};
pub use badge::status_badge;
pub use card::listing_card;
pub use features::feature_list;
pub use section::{check_list, content_section, hero, ContentSection};
