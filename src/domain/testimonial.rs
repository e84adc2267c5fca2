// src/domain/testimonial.rs

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Aankoop,
    Verkoop,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Service::Aankoop => "Aankoop",
            Service::Verkoop => "Verkoop",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub author: &'static str,
    pub rating: f64,
    pub date: NaiveDate,
    pub content: &'static str,
    pub service: Service,
}

impl Testimonial {
    /// Dutch short date, "15-1-2024".
    pub fn display_date(&self) -> String {
        self.date.format("%-d-%-m-%Y").to_string()
    }
}

/// The published reviews, newest first.
pub fn all() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            author: "Familie de Vries",
            rating: 9.0,
            date: date(2024, 1, 15),
            content: "Joost heeft ons uitstekend geholpen bij de aankoop van ons droomhuis. \
                      Zijn expertise en persoonlijke aanpak waren precies wat we zochten.",
            service: Service::Aankoop,
        },
        Testimonial {
            id: 2,
            author: "Peter van Dam",
            rating: 9.5,
            date: date(2023, 12, 20),
            content: "Zeer tevreden over de verkoop van onze woning. Joost is professioneel, \
                      communiceert helder en heeft veel kennis van de lokale markt.",
            service: Service::Verkoop,
        },
    ]
}

/// Mean rating, `None` when there are no reviews.
pub fn average_rating(testimonials: &[Testimonial]) -> Option<f64> {
    if testimonials.is_empty() {
        return None;
    }
    let total: f64 = testimonials.iter().map(|t| t.rating).sum();
    Some(total / testimonials.len() as f64)
}

/// One decimal, halves rounded up: 9.25 -> "9.3".
pub fn format_average(average: f64) -> String {
    format!("{:.1}", (average * 10.0).round() / 10.0)
}

/// Ratings print without a trailing ".0": 9 -> "9", 9.5 -> "9.5".
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.0}")
    } else {
        format!("{rating}")
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
