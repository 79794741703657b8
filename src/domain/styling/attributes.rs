//! Tagged profile attributes recognised by the recommendation rules.
//!
//! Every attribute parses from an optional, free-form string. Matching is
//! case-insensitive on the whole value and parsing never fails: anything the
//! rules do not know about lands in an explicit fallback variant.

/// Lower-cases the whole raw value; absence becomes the empty string.
pub(crate) fn normalize(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_lowercase()
}

/// Cool/warm/neutral skin color classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Undertone {
    Cool,
    Warm,
    /// Explicit "neutral", empty, and anything unrecognised.
    Neutral,
}

impl Undertone {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match normalize(raw).as_str() {
            "cool" => Undertone::Cool,
            "warm" => Undertone::Warm,
            _ => Undertone::Neutral,
        }
    }
}

/// Skin tone bucket used for skincare advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinTone {
    /// "fair" or "light"
    Fair,
    /// "medium" or "tan"
    Medium,
    /// "deep" or "dark"
    Deep,
    Other,
}

impl SkinTone {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match normalize(raw).as_str() {
            "fair" | "light" => SkinTone::Fair,
            "medium" | "tan" => SkinTone::Medium,
            "deep" | "dark" => SkinTone::Deep,
            _ => SkinTone::Other,
        }
    }
}

/// Body shape used for clothing advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyType {
    Hourglass,
    Pear,
    Rectangle,
    InvertedTriangle,
    Other,
}

impl BodyType {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match normalize(raw).as_str() {
            "hourglass" => BodyType::Hourglass,
            "pear" => BodyType::Pear,
            "rectangle" => BodyType::Rectangle,
            "inverted_triangle" => BodyType::InvertedTriangle,
            _ => BodyType::Other,
        }
    }
}

/// Style tags that each contribute one clothing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StylePreference {
    Minimal,
    Streetwear,
    Classic,
    Edgy,
    Boho,
}

impl StylePreference {
    /// Returns all style tags in rule evaluation order.
    pub fn all() -> &'static [StylePreference] {
        &[
            StylePreference::Minimal,
            StylePreference::Streetwear,
            StylePreference::Classic,
            StylePreference::Edgy,
            StylePreference::Boho,
        ]
    }

    /// Parses one tag. Unknown tags yield `None`.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "minimal" => Some(StylePreference::Minimal),
            "streetwear" => Some(StylePreference::Streetwear),
            "classic" => Some(StylePreference::Classic),
            "edgy" => Some(StylePreference::Edgy),
            "boho" => Some(StylePreference::Boho),
            _ => None,
        }
    }
}

/// Spending tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Budget {
    Budget,
    Premium,
    Other,
}

impl Budget {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match normalize(raw).as_str() {
            "budget" => Budget::Budget,
            "premium" => Budget::Premium,
            _ => Budget::Other,
        }
    }
}
