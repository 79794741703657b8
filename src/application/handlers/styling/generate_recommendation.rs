//! GenerateRecommendation - Command handler running the rule engine.
//!
//! The engine result is returned as soon as it is computed. Persistence runs
//! on a spawned task bounded by a timeout, so a slow or failing store can
//! never delay or change the response.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::foundation::RecordId;
use crate::domain::styling::{Profile, Recommendation, RecommendationEngine};
use crate::ports::{
    to_document, StorageError, StyleRecordStore, PROFILE_COLLECTION, RECOMMENDATION_COLLECTION,
};

/// Upper bound for one background save of profile plus recommendation.
pub const DEFAULT_PERSIST_TIMEOUT: Duration = Duration::from_secs(10);

/// Command to generate recommendations for a profile.
#[derive(Debug, Clone)]
pub struct GenerateRecommendationCommand {
    pub profile: Profile,
}

/// What happened to the best-effort persistence step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceOutcome {
    /// No store is wired up.
    Skipped,
    /// Both documents were written.
    Stored {
        profile_id: RecordId,
        recommendation_id: RecordId,
    },
    /// A write failed or timed out; the error was logged and ignored.
    Failed(String),
}

/// Background save started by the handler.
///
/// Dropping it detaches the task; the save keeps running.
#[derive(Debug)]
pub struct PendingPersistence(Option<JoinHandle<PersistenceOutcome>>);

impl PendingPersistence {
    pub fn is_skipped(&self) -> bool {
        self.0.is_none()
    }

    /// Waits for the background save to finish.
    pub async fn outcome(self) -> PersistenceOutcome {
        match self.0 {
            None => PersistenceOutcome::Skipped,
            Some(task) => task
                .await
                .unwrap_or_else(|e| PersistenceOutcome::Failed(e.to_string())),
        }
    }
}

/// Result of generating recommendations.
#[derive(Debug)]
pub struct GenerateRecommendationResult {
    pub recommendation: Recommendation,
    pub persistence: PendingPersistence,
}

/// Handler for generating recommendations.
pub struct GenerateRecommendationHandler {
    store: Option<Arc<dyn StyleRecordStore>>,
    persist_timeout: Duration,
}

impl GenerateRecommendationHandler {
    pub fn new(store: Option<Arc<dyn StyleRecordStore>>) -> Self {
        Self {
            store,
            persist_timeout: DEFAULT_PERSIST_TIMEOUT,
        }
    }

    pub fn with_persist_timeout(mut self, timeout: Duration) -> Self {
        self.persist_timeout = timeout;
        self
    }

    /// Runs the engine and, if a store is available, starts saving profile
    /// and recommendation in the background. Never fails.
    pub async fn handle(&self, cmd: GenerateRecommendationCommand) -> GenerateRecommendationResult {
        let recommendation = RecommendationEngine::recommend(&cmd.profile);
        debug!(
            makeup = recommendation.makeup.len(),
            skincare = recommendation.skincare.len(),
            clothing = recommendation.clothing.len(),
            accessories = recommendation.accessories.len(),
            total = recommendation.line_count(),
            "Recommendation generated"
        );

        let persistence = match &self.store {
            None => PendingPersistence(None),
            Some(store) => {
                let store = Arc::clone(store);
                let document = recommendation.clone();
                let timeout = self.persist_timeout;
                PendingPersistence(Some(tokio::spawn(async move {
                    persist_with_timeout(store, cmd.profile, document, timeout).await
                })))
            }
        };

        GenerateRecommendationResult {
            recommendation,
            persistence,
        }
    }
}

async fn persist_with_timeout(
    store: Arc<dyn StyleRecordStore>,
    profile: Profile,
    recommendation: Recommendation,
    limit: Duration,
) -> PersistenceOutcome {
    match tokio::time::timeout(limit, persist(store.as_ref(), &profile, &recommendation)).await {
        Ok(Ok((profile_id, recommendation_id))) => {
            debug!(%profile_id, %recommendation_id, "Recommendation persisted");
            PersistenceOutcome::Stored {
                profile_id,
                recommendation_id,
            }
        }
        Ok(Err(e)) => {
            warn!(error = %e, "Failed to persist recommendation; continuing");
            PersistenceOutcome::Failed(e.to_string())
        }
        Err(_) => {
            warn!(timeout_ms = limit.as_millis() as u64, "Persisting recommendation timed out");
            PersistenceOutcome::Failed(format!("timed out after {:?}", limit))
        }
    }
}

/// Saves the profile first; the recommendation is only written if that succeeded.
async fn persist(
    store: &dyn StyleRecordStore,
    profile: &Profile,
    recommendation: &Recommendation,
) -> Result<(RecordId, RecordId), StorageError> {
    let profile_id = store.save(PROFILE_COLLECTION, to_document(profile)?).await?;
    let recommendation_id = store
        .save(RECOMMENDATION_COLLECTION, to_document(recommendation)?)
        .await?;
    Ok((profile_id, recommendation_id))
}
