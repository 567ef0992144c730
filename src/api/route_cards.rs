//! Handlers de Route Cards
//!
//! Este módulo maneja el listado, la creación y el cambio de estado de las
//! tarjetas de ruta.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::models::route_card::{
    CreateRouteCardRequest, RouteCard, UpdateRouteCardStatusRequest,
};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Obtener todas las tarjetas de ruta con sus pasos anidados
pub async fn get_route_cards(State(state): State<AppState>) -> Json<Vec<RouteCard>> {
    let store = state.store.read().await;
    Json(store.route_cards().to_vec())
}

/// Crear una tarjeta de ruta con sus pasos
pub async fn create_route_card(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteCardRequest>,
) -> AppResult<(StatusCode, Json<RouteCard>)> {
    // Validar datos de entrada, incluyendo cada paso del lote
    request.validate().map_err(AppError::Validation)?;
    for step in &request.steps {
        step.validate().map_err(AppError::Validation)?;
    }

    // Una tarjeta recién creada nunca nace planificada
    let mut request = request;
    request.scheduled = false;

    let mut store = state.store.write().await;
    let card = store.create_route_card(request);

    Ok((StatusCode::CREATED, Json(card)))
}

/// Actualizar estado y flag de planificación de una tarjeta
pub async fn update_route_card_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRouteCardStatusRequest>,
) -> AppResult<Json<RouteCard>> {
    let mut store = state.store.write().await;
    store
        .update_route_card_status(id, request.status, request.scheduled)
        .map(Json)
        .ok_or_else(|| not_found_error("Route card", &id.to_string()))
}
