//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Persist submitted profiles and generated recommendations
    #[serde(default = "default_persist_recommendations")]
    pub persist_recommendations: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            persist_recommendations: default_persist_recommendations(),
            verbose_errors: false,
        }
    }
}

fn default_persist_recommendations() -> bool {
    true
}
