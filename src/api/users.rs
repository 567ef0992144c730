//! Handlers de Users
//!
//! Los usuarios son datos de referencia de solo lectura.

use axum::{extract::State, Json};

use crate::models::user::User;
use crate::state::AppState;

/// Obtener todos los usuarios
pub async fn get_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let store = state.store.read().await;
    Json(store.users().to_vec())
}
