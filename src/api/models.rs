use serde::{Deserialize, Deserializer};
use serde_json::Value;

// envelope
//  ├── resultaten[]
//  │    ├── id
//  │    ├── adres
//  │    │    ├── straat
//  │    │    ├── huisnummer { hoofdnummer, toevoeging }
//  │    │    ├── postcode
//  │    │    └── plaats
//  │    ├── financieel.overdracht { status, koopprijs }
//  │    ├── algemeen { woonoppervlakte, aantalKamers, bouwjaar, energieklasse, woonhuistype }
//  │    ├── detail.kadaster[].kadastergegevens.oppervlakte
//  │    ├── teksten.aanbiedingstekst
//  │    ├── media[] { link, volgnummer, mimetype }
//  │    └── diversen.diversen.objectcode
//  └── paginering { volgende, totaalAantal }
//
// Only the fields the site renders are modelled; everything else is ignored.

/// Records stay raw here so one malformed record cannot sink the whole feed;
/// each is decoded into a `RawListing` on its own.
#[derive(Debug, Default, Deserialize)]
pub struct ListingsEnvelope {
    #[serde(default, rename = "resultaten", deserialize_with = "null_as_default")]
    pub results: Vec<Value>,
    #[serde(default, rename = "paginering")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(rename = "volgende")]
    pub next: Option<String>,
    #[serde(rename = "totaalAantal")]
    pub total: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawListing {
    #[serde(rename = "adres")]
    pub address: Option<Address>,
    #[serde(rename = "financieel")]
    pub financial: Option<Financial>,
    #[serde(rename = "algemeen")]
    pub general: Option<General>,
    pub detail: Option<Detail>,
    #[serde(rename = "teksten")]
    pub texts: Option<Texts>,
    #[serde(deserialize_with = "null_as_default")]
    pub media: Vec<Media>,
    #[serde(rename = "diversen")]
    pub misc: Option<Misc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "straat")]
    pub street: Option<String>,
    #[serde(rename = "huisnummer")]
    pub house_number: Option<HouseNumber>,
    #[serde(rename = "postcode")]
    pub postal_code: Option<String>,
    #[serde(rename = "plaats")]
    pub city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HouseNumber {
    #[serde(rename = "hoofdnummer")]
    #[serde(deserialize_with = "lenient_string")]
    pub number: Option<String>,
    #[serde(rename = "toevoeging")]
    #[serde(deserialize_with = "lenient_string")]
    pub suffix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Financial {
    #[serde(rename = "overdracht")]
    pub transfer: Option<Transfer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Transfer {
    #[serde(deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(rename = "koopprijs")]
    pub asking_price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct General {
    #[serde(rename = "woonoppervlakte")]
    pub living_area: Option<f64>,
    #[serde(rename = "aantalKamers")]
    #[serde(deserialize_with = "lenient_string")]
    pub rooms: Option<String>,
    #[serde(rename = "bouwjaar")]
    #[serde(deserialize_with = "lenient_string")]
    pub construction_year: Option<String>,
    #[serde(rename = "energieklasse")]
    #[serde(deserialize_with = "lenient_string")]
    pub energy_label: Option<String>,
    #[serde(rename = "woonhuistype")]
    pub house_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Detail {
    #[serde(deserialize_with = "null_as_default")]
    pub kadaster: Vec<Cadastre>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Cadastre {
    #[serde(rename = "kadastergegevens")]
    pub data: Option<CadastreData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CadastreData {
    #[serde(rename = "oppervlakte")]
    pub area: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Texts {
    #[serde(rename = "aanbiedingstekst")]
    pub offering: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Media {
    pub link: Option<String>,
    #[serde(rename = "volgnummer")]
    pub sequence: Option<i64>,
    pub mimetype: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Misc {
    #[serde(rename = "diversen")]
    pub inner: Option<MiscInner>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MiscInner {
    #[serde(rename = "objectcode")]
    pub object_code: Option<String>,
}

/// `null` where a collection is expected reads as an empty collection.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fields the provider types loosely: accept strings and numbers, drop anything else.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
