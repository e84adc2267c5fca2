use crate::domain::price::format_price;
use crate::domain::slug::detail_path;
use crate::domain::Listing;
use crate::templates::components::{feature_list, status_badge};
use maud::{html, Markup};

pub const TEASER_CHARS: usize = 130;

pub fn listing_card(listing: &Listing) -> Markup {
    let href = detail_path(listing);
    html! {
        article class="card card-side" {
            @if let Some(image) = listing.main_image() {
                figure {
                    a href=(href) {
                        img src=(image.resized()) alt=(listing.street_line()) loading="lazy";
                    }
                }
            }
            div class="card-body" {
                h2 class="card-title" {
                    a href=(href) { (listing.street_line()) }
                    span class="card-subtitle" { (listing.postal_line()) }
                }
                h3 class="card-price" {
                    @if let Some(price) = listing.price {
                        (format_price(price))
                    }
                    (status_badge(listing.status.as_deref()))
                }
                @if !listing.offering.is_empty() {
                    p { (listing.teaser(TEASER_CHARS)) }
                }
                (feature_list(listing))
            }
        }
    }
}
