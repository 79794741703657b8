//! HTTP handlers for styling endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::styling::{
    GenerateRecommendationCommand, GenerateRecommendationHandler, GetTrendsHandler,
    GetTrendsQuery,
};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{ErrorResponse, RecommendRequest, RecommendationResponse, TrendsResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct StylingHandlers {
    generate_handler: Arc<GenerateRecommendationHandler>,
    trends_handler: Arc<GetTrendsHandler>,
    verbose_errors: bool,
}

impl StylingHandlers {
    pub fn new(
        generate_handler: Arc<GenerateRecommendationHandler>,
        trends_handler: Arc<GetTrendsHandler>,
    ) -> Self {
        Self {
            generate_handler,
            trends_handler,
            verbose_errors: false,
        }
    }

    /// Include parser diagnostics in error responses.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/recommend - Generate recommendations for a profile
pub async fn recommend(
    State(handlers): State<StylingHandlers>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!("Rejected recommend payload: {}", rejection.body_text());
            let error = rejection_to_error(&rejection, handlers.verbose_errors);
            return handle_styling_error(error);
        }
    };

    let cmd = GenerateRecommendationCommand {
        profile: req.into(),
    };

    let result = handlers.generate_handler.handle(cmd).await;
    let response: RecommendationResponse = result.recommendation.into();
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/trends - Current curated trends
pub async fn get_trends(State(handlers): State<StylingHandlers>) -> Response {
    let response: TrendsResponse = handlers.trends_handler.handle(GetTrendsQuery).into();
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn rejection_to_error(rejection: &JsonRejection, verbose: bool) -> DomainError {
    let error = match rejection {
        JsonRejection::JsonDataError(_) => DomainError::validation(
            "body",
            "Request body does not match the profile schema",
        ),
        JsonRejection::JsonSyntaxError(_) => {
            DomainError::new(ErrorCode::InvalidFormat, "Request body is not valid JSON")
        }
        JsonRejection::MissingJsonContentType(_) => DomainError::new(
            ErrorCode::UnsupportedMediaType,
            "Expected `Content-Type: application/json`",
        ),
        _ if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => DomainError::new(
            ErrorCode::PayloadTooLarge,
            "Request body exceeds the size limit",
        ),
        _ => DomainError::new(ErrorCode::InternalError, "Failed to read request body"),
    };

    if verbose {
        error.with_detail("reason", rejection.body_text())
    } else {
        error
    }
}

fn handle_styling_error(error: DomainError) -> Response {
    let status = match error.code() {
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let mut body = ErrorResponse::new(error.code(), error.message());
    if !error.details.is_empty() {
        if let Ok(details) = serde_json::to_value(&error.details) {
            body = body.with_details(details);
        }
    }

    (status, Json(body)).into_response()
}
