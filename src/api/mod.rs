//! API endpoints
//!
//! Este módulo contiene los endpoints de la API y el ensamblado del router.

pub mod analytics;
pub mod departments;
pub mod operations;
pub mod route_cards;
pub mod schedule;
pub mod users;

use axum::{
    response::Json,
    routing::{get, patch},
    Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/departments", get(departments::get_departments))
        .route("/sections", get(departments::get_sections))
        .route("/users", get(users::get_users))
        .route(
            "/operations",
            get(operations::get_operations).post(operations::create_operation),
        )
        .route(
            "/route-cards",
            get(route_cards::get_route_cards).post(route_cards::create_route_card),
        )
        .route("/route-cards/analytics", get(analytics::get_analytics))
        .route(
            "/route-cards/:id",
            patch(route_cards::update_route_card_status),
        )
        .route(
            "/schedule",
            get(schedule::get_schedule).post(schedule::plan_route_card),
        )
}

/// Ensamblar la aplicación completa con middleware y estado compartido
pub fn create_app(state: AppState) -> Router {
    // Sin orígenes configurados se permite cualquiera (modo desarrollo)
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api", create_api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check del servicio
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "production-scheduling",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
