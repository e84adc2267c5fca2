use crate::domain::price::format_area;
use crate::domain::Listing;
use maud::{html, Markup};

/// Icon row with the optional facts about a listing. Absent facts are left out.
pub fn feature_list(listing: &Listing) -> Markup {
    html! {
        ul class="features" {
            @if let Some(area) = listing.living_area {
                li { img src="/icons/oppervlakte.svg" alt=""; (format_area(area)) }
            }
            @if let Some(area) = listing.plot_area {
                li { img src="/icons/perceel.svg" alt=""; (format_area(area)) " perceel" }
            }
            @if let Some(rooms) = &listing.rooms {
                li { img src="/icons/house-room.svg" alt=""; (rooms) " kamers" }
            }
            @if let Some(label) = &listing.energy_label {
                li { img src="/icons/energy.svg" alt=""; "Energielabel " (label) }
            }
        }
    }
}
