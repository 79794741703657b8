//! Application router - wires handlers, routes and cross-cutting layers.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::styling::{
    CheckStorageHandler, GenerateRecommendationHandler, GetTrendsHandler,
};
use crate::config::{AppConfig, ServerConfig};
use crate::ports::StyleRecordStore;

use super::styling::{styling_routes, StylingHandlers};
use super::system::{system_routes, SystemHandlers};

/// Builds the complete HTTP application.
///
/// `store` is the optional persistence capability; without it the service
/// still answers every endpoint and simply skips persistence.
///
/// Routes:
/// - `GET /` - Liveness message
/// - `GET /test` - Storage diagnostics
/// - `POST /api/recommend` - Generate recommendations
/// - `GET /api/trends` - Current trends
pub fn build_router(config: &AppConfig, store: Option<Arc<dyn StyleRecordStore>>) -> Router {
    let database = config.database.as_ref();
    let database_url_set = database.is_some_and(|db| !db.url.is_empty());
    let database_name_set = database.is_some_and(|db| db.name.is_some());

    let styling = StylingHandlers::new(
        Arc::new(GenerateRecommendationHandler::new(store.clone())),
        Arc::new(GetTrendsHandler::new()),
    )
    .with_verbose_errors(config.features.verbose_errors);

    let system = SystemHandlers::new(Arc::new(CheckStorageHandler::new(
        store,
        database_url_set,
        database_name_set,
    )));

    Router::new()
        .merge(system_routes(system))
        .nest("/api", styling_routes(styling))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http())
}

/// Permissive CORS unless an explicit origin list is configured.
///
/// Credentials are only allowed with explicit origins, since browsers
/// refuse credentialed responses with a wildcard origin.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let Some(configured) = server.allowed_origins() else {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    };

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn router_serves_without_store() {
        let app = build_router(&AppConfig::default(), None);

        let response = app
            .oneshot(Request::builder().uri("/api/trends").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn router_allows_any_origin_by_default() {
        let app = build_router(&AppConfig::default(), None);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/recommend")
                    .header(header::ORIGIN, "https://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn router_echoes_configured_origin() {
        let mut config = AppConfig::default();
        config.server.cors_origins = Some("http://localhost:5173".to_string());
        let app = build_router(&config, None);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = build_router(&AppConfig::default(), None);

        let response = app
            .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
