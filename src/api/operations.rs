//! Handlers de Operations
//!
//! Este módulo maneja el listado y la creación de plantillas de operación.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::models::operation::{CreateOperationRequest, Operation};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

/// Obtener todas las plantillas de operación
pub async fn get_operations(State(state): State<AppState>) -> Json<Vec<Operation>> {
    let store = state.store.read().await;
    Json(store.operations().to_vec())
}

/// Crear una nueva plantilla de operación
pub async fn create_operation(
    State(state): State<AppState>,
    Json(request): Json<CreateOperationRequest>,
) -> AppResult<(StatusCode, Json<Operation>)> {
    // Validar datos de entrada
    request.validate().map_err(AppError::Validation)?;

    let mut store = state.store.write().await;
    let operation = store.create_operation(request);

    Ok((StatusCode::CREATED, Json(operation)))
}
