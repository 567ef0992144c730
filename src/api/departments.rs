//! Handlers de Departments y Sections
//!
//! Datos de referencia de solo lectura.

use axum::{extract::State, Json};

use crate::models::department::{Department, Section};
use crate::state::AppState;

/// Obtener todos los departamentos
pub async fn get_departments(State(state): State<AppState>) -> Json<Vec<Department>> {
    let store = state.store.read().await;
    Json(store.departments().to_vec())
}

/// Obtener todas las secciones de trabajo
pub async fn get_sections(State(state): State<AppState>) -> Json<Vec<Section>> {
    let store = state.store.read().await;
    Json(store.sections().to_vec())
}
