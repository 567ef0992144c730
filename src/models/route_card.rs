//! Modelo de RouteCard
//!
//! Una tarjeta de ruta es una orden de trabajo compuesta de pasos
//! ordenados. Los pasos se crean en lote junto con la tarjeta y son
//! inmutables después.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Estado de la tarjeta de ruta
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RouteCardStatus {
    #[default]
    Draft,
    Approved,
}

/// Paso de una tarjeta de ruta, vinculado a una sección y tipo de operación
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteCardStep {
    pub id: i64,
    pub route_card_id: i64,
    pub department_id: i64,
    pub section_id: i64,
    pub operation_type: String,
    pub operation_number: String,
    pub technology: String,
    pub required_duration_min: i32,
}

/// Tarjeta de ruta con sus pasos anidados
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteCard {
    pub id: i64,
    pub order_number: String,
    pub route_card_number: String,
    pub responsible_engineer: i64,
    pub status: RouteCardStatus,
    pub scheduled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub steps: Vec<RouteCardStep>,
}

/// Borrador de paso dentro del request de creación (sin ids asignados)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RouteCardStepDraft {
    pub department_id: i64,
    pub section_id: i64,

    #[validate(length(min = 1, max = 100))]
    pub operation_type: String,

    #[validate(length(min = 1, max = 50))]
    pub operation_number: String,

    #[validate(length(min = 1, max = 500))]
    pub technology: String,

    #[validate(range(min = 1))]
    pub required_duration_min: i32,
}

/// Request para crear una tarjeta de ruta con sus pasos
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteCardRequest {
    #[validate(length(min = 1, max = 50))]
    pub order_number: String,

    #[validate(length(min = 1, max = 50))]
    pub route_card_number: String,

    pub responsible_engineer: i64,

    #[serde(default)]
    pub status: RouteCardStatus,

    // El boundary HTTP siempre fuerza scheduled = false en creación
    #[serde(default)]
    pub scheduled: bool,

    // Cada paso se valida individualmente en el handler
    #[validate(length(min = 1))]
    pub steps: Vec<RouteCardStepDraft>,
}

/// Request para actualizar estado y flag de planificación de una tarjeta
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRouteCardStatusRequest {
    pub status: RouteCardStatus,
    pub scheduled: Option<bool>,
}
