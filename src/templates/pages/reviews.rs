use crate::domain::testimonial::{format_average, format_rating, Testimonial};
use crate::templates::site_layout;
use maud::{html, Markup};

pub fn reviews_page(testimonials: &[Testimonial], average: Option<f64>, is_admin: bool) -> Markup {
    site_layout(
        "Beoordelingen",
        is_admin,
        html! {
            main class="container" {
                h1 { "Beoordelingen" }

                div class="card summary" {
                    div {
                        p class="rating" {
                            @match average {
                                Some(avg) => (format_average(avg)),
                                None => "-",
                            }
                        }
                        p class="muted" { "Gemiddelde beoordeling" }
                    }
                    p { (testimonials.len()) " beoordelingen" }
                }

                div class="reviews" {
                    @for review in testimonials {
                        article class="card review" id=(format!("beoordeling-{}", review.id)) {
                            header {
                                div {
                                    h3 { (review.author) }
                                    p class="muted" { (review.service.to_string()) }
                                }
                                div class="review-score" {
                                    p class="rating" { (format_rating(review.rating)) }
                                    time datetime=(review.date.to_string()) { (review.display_date()) }
                                }
                            }
                            p { (review.content) }
                        }
                    }
                }
            }
        },
    )
}
