use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::docs;
use super::drivers;
use super::health;
use super::middleware::metrics_middleware;
use super::state::AppState;
use super::teams;
use crate::infrastructure::observability::{metrics_handler, PrometheusMetrics};

/// Team and driver routes
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/teams", post(teams::create_team))
        .route("/teams", get(teams::list_teams))
        .route("/teams/{id}", get(teams::get_team))
        .route("/teams/{id}", put(teams::update_team))
        .route("/teams/{id}", delete(teams::delete_team))
        .route("/teams/{id}/drivers", get(teams::list_team_drivers))
        .route("/drivers", post(drivers::create_driver))
        .route("/drivers", get(drivers::list_drivers))
        .route("/drivers/{id}", get(drivers::get_driver))
        .route("/drivers/{id}", put(drivers::update_driver))
        .route("/drivers/{id}", delete(drivers::delete_driver))
        .route_layer(middleware::from_fn(metrics_middleware))
}

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api-docs", get(docs::openapi_document))
        .merge(create_api_router())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// Router serving the Prometheus scrape endpoint at `path`
pub fn create_metrics_router(metrics: PrometheusMetrics, path: &str) -> Router {
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}
