use crate::domain::price::format_price;
use crate::domain::Listing;
use crate::templates::{
    components::{feature_list, status_badge},
    site_layout,
};
use maud::{html, Markup};

pub fn listing_detail_page(listing: &Listing, is_admin: bool) -> Markup {
    let street = listing.street_line();
    let cover = listing
        .main_image()
        .map(|image| format!("background-image: url({})", image.resized()));

    site_layout(
        &street,
        is_admin,
        html! {
            section class="hero" style=[cover] {
                div class="hero-overlay" {}
                div class="hero-content" {
                    h1 { (street) }
                    span class="hero-sub" { (listing.postal_line()) }
                }
            }

            main class="container narrow listing-detail" {
                h2 {
                    (street)
                    div class="subtitle" { (listing.postal_line()) }
                }
                h3 class="card-price" {
                    @if let Some(price) = listing.price {
                        (format_price(price))
                    }
                    (status_badge(listing.status.as_deref()))
                }

                (feature_list(listing))

                dl class="facts" {
                    @if let Some(kind) = &listing.house_type {
                        dt { "Soort woning" } dd { (kind) }
                    }
                    @if let Some(year) = &listing.construction_year {
                        dt { "Bouwjaar" } dd { (year) }
                    }
                }

                @if !listing.offering.is_empty() {
                    p class="offering" { (listing.offering) }
                }

                @if !listing.images.is_empty() {
                    div class="gallery" {
                        @for image in &listing.images {
                            figure {
                                a href=(image.resized()) target="_blank" rel="noopener" {
                                    img src=(image.link) alt="" loading="lazy";
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
