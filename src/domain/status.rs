// src/domain/status.rs

/// Normalized status of a listing that must never be shown publicly.
pub const WITHDRAWN: &str = "ingetrokken";

/// Lowercases a raw transaction status and turns every character outside
/// `[a-zA-Z0-9 ]` into a space: "Verkocht_onder_voorbehoud" -> "verkocht onder voorbehoud".
pub fn normalize_status(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == ' ' { c } else { ' ' })
        .collect()
}

pub fn is_withdrawn(status: Option<&str>) -> bool {
    status.map_or(false, |s| normalize_status(s) == WITHDRAWN)
}

/// Visual weight of the status badge on cards and detail pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Neutral,
    Warning,
    Plain,
}

impl BadgeTone {
    pub fn for_status(normalized: &str) -> Self {
        match normalized {
            "beschikbaar" => Self::Success,
            "verkocht" => Self::Neutral,
            "verkocht onder voorbehoud" => Self::Warning,
            _ => Self::Plain,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "badge badge-success",
            Self::Neutral => "badge badge-neutral",
            Self::Warning => "badge badge-warning",
            Self::Plain => "badge",
        }
    }
}
