//! HTTP DTOs for system endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::styling::{DatabaseState, StorageStatus};

/// Liveness message served at `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

impl RootResponse {
    pub fn running() -> Self {
        Self {
            message: "StyleSense AI backend is running".to_string(),
        }
    }
}

/// Storage diagnostics served at `/test`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageStatusResponse {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl From<StorageStatus> for StorageStatusResponse {
    fn from(status: StorageStatus) -> Self {
        let connection_status = if status.is_connected() {
            "Connected"
        } else {
            "Not Connected"
        };
        let database = match &status.database {
            DatabaseState::NotConfigured => "⚠️  Available but not initialized".to_string(),
            DatabaseState::Connected => "✅ Connected & Working".to_string(),
            DatabaseState::Error(message) => format!("⚠️  Connected but Error: {}", message),
        };

        Self {
            backend: "✅ Running".to_string(),
            database,
            database_url: status.database_url_set.map(set_label),
            database_name: status.database_name_set.map(set_label),
            connection_status: connection_status.to_string(),
            collections: status.collections,
        }
    }
}

fn set_label(set: bool) -> String {
    let label = if set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}
