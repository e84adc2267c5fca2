// src/domain/listing.rs

use crate::api::models::RawListing;

/// A provider record, flattened and normalized for display.
/// This acts as an anti-corruption layer between the provider payload and the templates.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Listing {
    pub object_code: String,

    // Address
    pub street: String,
    pub house_number: String,
    pub house_number_suffix: Option<String>,
    pub postal_code: String,
    pub city: String,

    // Financial
    pub status: Option<String>,
    pub price: Option<f64>,

    // Descriptive
    pub living_area: Option<f64>,
    pub plot_area: Option<f64>,
    pub rooms: Option<String>,
    pub construction_year: Option<String>,
    pub energy_label: Option<String>,
    pub house_type: Option<String>,
    pub offering: String,

    pub images: Vec<Image>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Image {
    pub link: String,
}

impl Image {
    /// The provider serves scaled variants through a query flag.
    pub fn resized(&self) -> String {
        format!("{}&resize=4", self.link)
    }
}

impl Listing {
    /// Flattens a raw provider record. Only the object code is required;
    /// every other missing field is simply absent.
    pub fn from_raw(raw: &RawListing) -> Result<Self, String> {
        let object_code = raw
            .misc
            .as_ref()
            .and_then(|m| m.inner.as_ref())
            .and_then(|m| m.object_code.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or("Missing or empty object code")?
            .to_string();

        let address = raw.address.as_ref();
        let house_number = address.and_then(|a| a.house_number.as_ref());
        let transfer = raw.financial.as_ref().and_then(|f| f.transfer.as_ref());
        let general = raw.general.as_ref();

        let plot_area = raw
            .detail
            .as_ref()
            .and_then(|d| d.kadaster.first())
            .and_then(|k| k.data.as_ref())
            .and_then(|k| k.area)
            .filter(|area| *area > 0.0);

        let mut media: Vec<_> = raw
            .media
            .iter()
            .filter(|m| {
                m.mimetype
                    .as_deref()
                    .map_or(true, |mime| mime.starts_with("image/"))
            })
            .filter_map(|m| {
                let link = m.link.as_deref().filter(|l| !l.is_empty())?;
                Some((m.sequence, link.to_string()))
            })
            .collect();
        // provider order wins when sequence numbers are missing
        media.sort_by_key(|(sequence, _)| sequence.unwrap_or(i64::MAX));

        Ok(Self {
            object_code,
            street: text(address.and_then(|a| a.street.as_deref())),
            house_number: text(house_number.and_then(|h| h.number.as_deref())),
            house_number_suffix: non_empty(house_number.and_then(|h| h.suffix.as_deref())),
            postal_code: text(address.and_then(|a| a.postal_code.as_deref())),
            city: text(address.and_then(|a| a.city.as_deref())),
            status: non_empty(transfer.and_then(|t| t.status.as_deref())),
            price: transfer.and_then(|t| t.asking_price),
            living_area: general.and_then(|g| g.living_area),
            plot_area,
            rooms: non_empty(general.and_then(|g| g.rooms.as_deref())),
            construction_year: non_empty(general.and_then(|g| g.construction_year.as_deref())),
            energy_label: non_empty(general.and_then(|g| g.energy_label.as_deref())),
            house_type: non_empty(general.and_then(|g| g.house_type.as_deref())),
            offering: text(
                raw.texts
                    .as_ref()
                    .and_then(|t| t.offering.as_deref()),
            ),
            images: media
                .into_iter()
                .map(|(_, link)| Image { link })
                .collect(),
        })
    }

    /// "Prinsengracht 12 A"
    pub fn street_line(&self) -> String {
        let mut line = format!("{} {}", self.street, self.house_number);
        if let Some(suffix) = &self.house_number_suffix {
            line.push(' ');
            line.push_str(suffix);
        }
        line.trim().to_string()
    }

    /// "1015 DV Amsterdam"
    pub fn postal_line(&self) -> String {
        format!("{} {}", self.postal_code, self.city).trim().to_string()
    }

    /// The first image is the cover photo.
    pub fn main_image(&self) -> Option<&Image> {
        self.images.first()
    }

    /// Offering text cut to `max_chars` characters followed by "...".
    pub fn teaser(&self, max_chars: usize) -> String {
        let teaser: String = self.offering.chars().take(max_chars).collect();
        format!("{teaser}...")
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
