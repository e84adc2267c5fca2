use crate::domain::Listing;
use crate::templates::{
    components::{hero, listing_card},
    site_layout,
};
use maud::{html, Markup};

/// Overview grid. `listings` arrive filtered and sorted.
pub fn listings_page(listings: &[Listing], is_admin: bool) -> Markup {
    site_layout(
        "Huizen",
        is_admin,
        html! {
            (hero("Huizen", Some(html! { "Bekijk ons huizen aanbod" }), "/interiors.webp"))

            main class="container" {
                @if listings.is_empty() {
                    p class="empty" { "Er zijn op dit moment geen woningen in ons aanbod." }
                } @else {
                    div class="listing-grid" {
                        @for listing in listings {
                            (listing_card(listing))
                        }
                    }
                }
            }
        },
    )
}
