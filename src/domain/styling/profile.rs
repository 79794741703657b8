//! Style profile - the input record for the recommendation engine.

use serde::{Deserialize, Serialize};

use super::attributes::{BodyType, Budget, SkinTone, StylePreference, Undertone};

/// A user's physical and stylistic attributes.
///
/// Every field is optional. Absence is never an error: the engine treats a
/// missing scalar as the empty string and a missing list as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_tone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undertone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_preferences: Option<Vec<String>>,

    /// Echoed in the summary only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessories_pref: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
}

impl Profile {
    pub fn undertone(&self) -> Undertone {
        Undertone::from_raw(self.undertone.as_deref())
    }

    pub fn skin_tone(&self) -> SkinTone {
        SkinTone::from_raw(self.skin_tone.as_deref())
    }

    pub fn body_type(&self) -> BodyType {
        BodyType::from_raw(self.body_type.as_deref())
    }

    pub fn budget(&self) -> Budget {
        Budget::from_raw(self.budget.as_deref())
    }

    /// Returns true if the tag appears anywhere in `style_preferences`.
    pub fn prefers(&self, style: StylePreference) -> bool {
        self.style_preferences
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|raw| StylePreference::from_raw(raw) == Some(style))
    }

    /// Accessory styles in input order, verbatim.
    pub fn accessory_styles(&self) -> &[String] {
        self.accessories_pref.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_deserializes_to_default() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn explicit_nulls_are_absent() {
        let json = r#"{"undertone": null, "style_preferences": null}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(profile.undertone.is_none());
        assert!(profile.style_preferences.is_none());
    }

    #[test]
    fn absent_fields_are_skipped_when_serialized() {
        let profile = Profile {
            skin_tone: Some("deep".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json, serde_json::json!({"skin_tone": "deep"}));
    }

    #[test]
    fn prefers_matches_any_case_and_position() {
        let profile = Profile {
            style_preferences: Some(vec!["Boho".to_string(), "MINIMAL".to_string()]),
            ..Default::default()
        };
        assert!(profile.prefers(StylePreference::Minimal));
        assert!(profile.prefers(StylePreference::Boho));
        assert!(!profile.prefers(StylePreference::Edgy));
    }

    #[test]
    fn accessory_styles_default_to_empty() {
        assert!(Profile::default().accessory_styles().is_empty());
    }
}
