//! Handlers de Schedule
//!
//! Este módulo maneja el listado filtrado del calendario y la operación de
//! planificación de tarjetas de ruta.

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::json;

use crate::models::schedule::{PlanRouteCardRequest, ScheduleFilters, ScheduleItem};
use crate::services::planner_service::SchedulePlanner;
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Obtener los schedule items, opcionalmente filtrados por sección y rango
pub async fn get_schedule(
    State(state): State<AppState>,
    Query(filters): Query<ScheduleFilters>,
) -> Json<Vec<ScheduleItem>> {
    let store = state.store.read().await;
    Json(store.filter_schedule(&filters))
}

/// (Re)planificar una tarjeta de ruta completa
///
/// La operación entera corre bajo un único write lock: ningún request
/// concurrente observa el plan a medio reemplazar.
pub async fn plan_route_card(
    State(state): State<AppState>,
    Json(request): Json<PlanRouteCardRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let mut store = state.store.write().await;
    SchedulePlanner::new(&mut store).plan_route_card(request.id, &request.items)?;

    Ok(Json(json!({ "success": true })))
}
