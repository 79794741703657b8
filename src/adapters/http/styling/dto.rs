//! HTTP DTOs for styling endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::styling::{Profile, Recommendation, TrendsSnapshot};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to generate recommendations. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body_type: Option<String>,
    #[serde(default)]
    pub skin_tone: Option<String>,
    #[serde(default)]
    pub undertone: Option<String>,
    #[serde(default)]
    pub style_preferences: Option<Vec<String>>,
    #[serde(default)]
    pub occasions: Option<Vec<String>>,
    #[serde(default)]
    pub accessories_pref: Option<Vec<String>>,
    #[serde(default)]
    pub budget: Option<String>,
}

impl From<RecommendRequest> for Profile {
    fn from(req: RecommendRequest) -> Self {
        Self {
            name: req.name,
            body_type: req.body_type,
            skin_tone: req.skin_tone,
            undertone: req.undertone,
            style_preferences: req.style_preferences,
            occasions: req.occasions,
            accessories_pref: req.accessories_pref,
            budget: req.budget,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Generated recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub profile_summary: BTreeMap<String, String>,
    pub makeup: Vec<String>,
    pub skincare: Vec<String>,
    pub clothing: Vec<String>,
    pub accessories: Vec<String>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(rec: Recommendation) -> Self {
        Self {
            profile_summary: rec.profile_summary,
            makeup: rec.makeup,
            skincare: rec.skincare,
            clothing: rec.clothing,
            accessories: rec.accessories,
        }
    }
}

/// Current trends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsResponse {
    pub makeup: Vec<String>,
    pub skincare: Vec<String>,
    pub fashion: Vec<String>,
    pub accessories: Vec<String>,
}

impl From<TrendsSnapshot> for TrendsResponse {
    fn from(trends: TrendsSnapshot) -> Self {
        Self {
            makeup: trends.makeup,
            skincare: trends.skincare,
            fashion: trends.fashion,
            accessories: trends.accessories,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_request_accepts_empty_object() {
        let req: RecommendRequest = serde_json::from_str("{}").unwrap();
        let profile: Profile = req.into();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn recommend_request_ignores_unknown_fields() {
        let json = r#"{"undertone": "warm", "favourite_color": "teal"}"#;
        let req: RecommendRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.undertone.as_deref(), Some("warm"));
    }

    #[test]
    fn recommend_request_maps_every_field() {
        let json = r#"{
            "name": "Sam",
            "body_type": "pear",
            "skin_tone": "deep",
            "undertone": "warm",
            "style_preferences": ["classic"],
            "occasions": ["work"],
            "accessories_pref": ["statement"],
            "budget": "premium"
        }"#;
        let req: RecommendRequest = serde_json::from_str(json).unwrap();
        let profile: Profile = req.into();

        assert_eq!(profile.name.as_deref(), Some("Sam"));
        assert_eq!(profile.body_type.as_deref(), Some("pear"));
        assert_eq!(profile.occasions, Some(vec!["work".to_string()]));
        assert_eq!(profile.accessories_pref, Some(vec!["statement".to_string()]));
        assert_eq!(profile.budget.as_deref(), Some("premium"));
    }

    #[test]
    fn recommendation_response_serializes_all_categories() {
        let rec = Recommendation {
            makeup: vec!["m".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(RecommendationResponse::from(rec)).unwrap();

        for key in ["profile_summary", "makeup", "skincare", "clothing", "accessories"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["makeup"][0], "m");
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::new("BAD_REQUEST", "nope")).unwrap();
        assert!(json.get("details").is_none());
        assert_eq!(json["code"], "BAD_REQUEST");
    }
}
