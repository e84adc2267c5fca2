use crate::domain::status::{normalize_status, BadgeTone};
use maud::{html, Markup};

/// Normalized status text in a colored badge; nothing when there is no status.
pub fn status_badge(status: Option<&str>) -> Markup {
    html! {
        @if let Some(raw) = status {
            @let normalized = normalize_status(raw);
            span class=(BadgeTone::for_status(&normalized).css_class()) { (normalized) }
        }
    }
}
