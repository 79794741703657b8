//! Recommendation - categorized advisory lines plus a profile echo.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::profile::Profile;

/// Output of the recommendation engine.
///
/// Category lists are append-only while the engine runs; their order is the
/// order in which rules fired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub profile_summary: BTreeMap<String, String>,
    pub makeup: Vec<String>,
    pub skincare: Vec<String>,
    pub clothing: Vec<String>,
    pub accessories: Vec<String>,
}

impl Recommendation {
    /// Creates an empty recommendation carrying the given summary.
    pub fn with_summary(profile_summary: BTreeMap<String, String>) -> Self {
        Self {
            profile_summary,
            ..Default::default()
        }
    }

    /// Total number of advisory lines across all categories.
    pub fn line_count(&self) -> usize {
        self.makeup.len() + self.skincare.len() + self.clothing.len() + self.accessories.len()
    }
}

/// Echoes the raw profile fields, original case, absent values as "".
pub fn summarize(profile: &Profile) -> BTreeMap<String, String> {
    let scalar = |value: &Option<String>| value.clone().unwrap_or_default();
    let joined = |values: &Option<Vec<String>>| values.as_deref().unwrap_or_default().join(", ");

    let mut summary = BTreeMap::new();
    summary.insert("body_type".to_string(), scalar(&profile.body_type));
    summary.insert("skin_tone".to_string(), scalar(&profile.skin_tone));
    summary.insert("undertone".to_string(), scalar(&profile.undertone));
    summary.insert(
        "style_preferences".to_string(),
        joined(&profile.style_preferences),
    );
    summary.insert("occasions".to_string(), joined(&profile.occasions));
    summary.insert("budget".to_string(), scalar(&profile.budget));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY_FIELDS: &[&str] = &[
        "body_type",
        "skin_tone",
        "undertone",
        "style_preferences",
        "occasions",
        "budget",
    ];

    #[test]
    fn summary_of_empty_profile_has_all_keys_blank() {
        let summary = summarize(&Profile::default());
        assert_eq!(summary.len(), SUMMARY_FIELDS.len());
        for key in SUMMARY_FIELDS {
            assert_eq!(summary.get(*key), Some(&String::new()), "key {}", key);
        }
    }

    #[test]
    fn summary_keeps_original_case_and_joins_lists() {
        let profile = Profile {
            undertone: Some("WARM".to_string()),
            style_preferences: Some(vec!["Boho".to_string(), "edgy".to_string()]),
            occasions: Some(vec!["work".to_string(), "date night".to_string()]),
            ..Default::default()
        };
        let summary = summarize(&profile);
        assert_eq!(summary["undertone"], "WARM");
        assert_eq!(summary["style_preferences"], "Boho, edgy");
        assert_eq!(summary["occasions"], "work, date night");
    }

    #[test]
    fn summary_omits_name() {
        let profile = Profile {
            name: Some("Ada".to_string()),
            ..Default::default()
        };
        assert!(!summarize(&profile).contains_key("name"));
    }

    #[test]
    fn line_count_sums_categories() {
        let mut rec = Recommendation::default();
        rec.makeup.push("a".to_string());
        rec.accessories.push("b".to_string());
        rec.accessories.push("c".to_string());
        assert_eq!(rec.line_count(), 3);
    }
}
