//! Handlers de Analytics
//!
//! Este módulo expone el resumen agregado para el dashboard.

use axum::{extract::State, Json};

use crate::models::analytics::AnalyticsSummary;
use crate::services::analytics_service::AnalyticsService;
use crate::state::AppState;

/// Obtener el resumen de analytics del estado actual
pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsSummary> {
    let store = state.store.read().await;
    Json(AnalyticsService::new(&store).summary())
}
